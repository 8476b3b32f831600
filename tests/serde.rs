#![cfg(feature = "serde")]

use easeful::{Back, Curve, Elastic, IntoEnumIterator, Tween};

#[test]
fn curves_serialize_by_name() {
    assert_eq!(
        serde_json::to_string(&Curve::EaseInOutBounce).unwrap(),
        "\"EaseInOutBounce\""
    );

    for curve in Curve::iter() {
        let json = serde_json::to_string(&curve).unwrap();
        assert_eq!(serde_json::from_str::<Curve>(&json).unwrap(), curve);
    }
}

#[test]
fn unknown_curve_is_rejected() {
    assert!(serde_json::from_str::<Curve>("\"EaseInWobble\"").is_err());
}

#[test]
fn tween_from_json() {
    let tween: Tween<f32> = serde_json::from_str(
        r#"{ "curve": "EaseOutQuad", "start": 1.0, "end": 3.0, "duration": 2.0 }"#,
    )
    .unwrap();

    assert_eq!(tween.curve, Curve::EaseOutQuad);
    assert_eq!(tween.value(2.0), 3.0);
}

#[test]
fn parameters_from_json() {
    let back: Back<f64> = serde_json::from_str(r#"{ "overshoot": 2.5 }"#).unwrap();
    assert_eq!(back, Back::new(2.5));

    let elastic: Elastic<f64> =
        serde_json::from_str(r#"{ "amplitude": null, "period": 0.3 }"#).unwrap();
    assert_eq!(elastic.amplitude(), None);
    assert_eq!(elastic.period(), 0.3);
}

#[test]
fn elastic_parameters_are_validated() {
    let err = serde_json::from_str::<Elastic<f64>>(r#"{ "amplitude": null, "period": 0.0 }"#)
        .unwrap_err();
    assert!(err.to_string().contains("invalid period"), "{}", err);

    assert!(serde_json::from_str::<Elastic<f64>>(r#"{ "amplitude": null, "period": -1.0 }"#).is_err());

    let elastic: Elastic<f32> = serde_json::from_str(r#"{ "period": 0.5 }"#).unwrap();
    assert!(elastic.ease_out(0.0, 1.0, 0.5).is_finite());
}

#[test]
fn elastic_round_trips() {
    let elastic = Elastic::new(Some(2.0f64), 0.4).unwrap();
    let json = serde_json::to_string(&elastic).unwrap();

    assert_eq!(serde_json::from_str::<Elastic<f64>>(&json).unwrap(), elastic);
}
