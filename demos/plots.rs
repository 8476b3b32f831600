use easeful::{Curve, IntoEnumIterator};
use gnuplot::{AxesCommon, Caption, Color, Figure};

fn main() {
    env_logger::init();

    let mut plots = Plots { plots: Vec::new() };
    for curve in Curve::iter() {
        plots.add(curve);
    }

    log::info!("plotting {} curves", plots.plots.len());

    plots.show_gnuplot();
}

fn sample(
    n: usize,
    anim: easeful::Anim<impl easeful::Fun<T = f32, V = f32>>,
) -> (Vec<f32>, Vec<f32>) {
    let mut ts = Vec::new();
    let mut vs = Vec::new();

    for i in 0..=n {
        let time = i as f32 / n as f32;
        let value = anim.eval(time);

        ts.push(time);
        vs.push(value);
    }

    (ts, vs)
}

struct Plot {
    name: &'static str,
    ts: Vec<f32>,
    vs: Vec<f32>,
    dvs: Vec<f32>,
}

struct Plots {
    plots: Vec<Plot>,
}

impl Plots {
    fn add(&mut self, curve: Curve) {
        let anim = easeful::tween(curve, 0.0f32, 1.0);
        let (ts, vs) = sample(200, anim.as_ref());

        // Derivatives are scaled down to share the value axis.
        let (_, dvs) = sample(200, anim.velocity().map(|v| v / 10.0));

        self.plots.push(Plot {
            name: curve.name(),
            ts,
            vs,
            dvs,
        });
    }

    fn show_gnuplot(&self) {
        let mut figure = Figure::new();

        let square_size = (self.plots.len() as f32).sqrt().ceil() as u32;

        for (i, plot) in self.plots.iter().enumerate() {
            figure
                .axes2d()
                .lines(&plot.ts, &plot.vs, &[Caption("value"), Color("blue")])
                .lines(&plot.ts, &plot.dvs, &[Caption("slope / 10"), Color("red")])
                .set_title(plot.name, &[])
                .set_pos_grid(square_size, square_size, i as u32);
        }

        if let Err(err) = figure.show() {
            log::error!("failed to run gnuplot: {:?}", err);
        }
    }
}
