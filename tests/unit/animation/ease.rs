use super::*;

fn all_eases() -> Vec<Ease> {
    let mut v = vec![
        Ease::Linear,
        Ease::InQuad,
        Ease::OutQuad,
        Ease::InOutQuad,
        Ease::InCubic,
        Ease::OutCubic,
        Ease::InOutCubic,
    ];
    for inflection in [0.5, 1.0, REFERENCE_INFLECTION, 10.0, 40.0] {
        v.push(Ease::Smooth { inflection });
    }
    for order in 0..=MAX_SMOOTHSTEP_ORDER {
        v.push(Ease::SmoothStep { order });
    }
    v
}

#[test]
fn endpoints_are_exact() {
    for ease in all_eases() {
        assert_eq!(ease.apply(0.0), 0.0, "{ease:?}");
        assert_eq!(ease.apply(1.0), 1.0, "{ease:?}");
    }
}

#[test]
fn out_of_range_progress_is_clamped() {
    for ease in all_eases() {
        assert_eq!(ease.apply(-0.5), 0.0, "{ease:?}");
        assert_eq!(ease.apply(1.5), 1.0, "{ease:?}");
    }
}

#[test]
fn monotonic_on_a_fine_grid() {
    for ease in all_eases() {
        let mut prev = ease.apply(0.0);
        for i in 1..=200 {
            let v = ease.apply(f64::from(i) / 200.0);
            assert!(v >= prev, "{ease:?} decreased at step {i}");
            prev = v;
        }
    }
}

#[test]
fn symmetric_eases_hit_half_at_midpoint() {
    for ease in [
        Ease::Linear,
        Ease::InOutQuad,
        Ease::InOutCubic,
        Ease::reference(),
        Ease::SmoothStep { order: 1 },
        Ease::SmoothStep { order: 7 },
    ] {
        assert!((ease.apply(0.5) - 0.5).abs() < 1e-9, "{ease:?}");
    }
}

#[test]
fn smoothstep_low_orders_match_closed_forms() {
    for i in 0..=10 {
        let x = f64::from(i) / 10.0;
        let s1 = x * x * (3.0 - 2.0 * x);
        let s2 = x * x * x * (x * (6.0 * x - 15.0) + 10.0);
        assert!((Ease::SmoothStep { order: 1 }.apply(x) - s1).abs() < 1e-12);
        assert!((Ease::SmoothStep { order: 2 }.apply(x) - s2).abs() < 1e-12);
    }
}

#[test]
fn higher_order_smoothstep_is_flatter_near_the_ends() {
    let lo = Ease::SmoothStep { order: 1 }.apply(0.05);
    let hi = Ease::SmoothStep { order: 7 }.apply(0.05);
    assert!(hi < lo);
}

#[test]
fn reference_is_default_and_sharper_than_linear_in_the_middle() {
    assert_eq!(Ease::default(), Ease::reference());
    let e = Ease::reference();
    assert!(e.apply(0.1) < 0.1);
    assert!(e.apply(0.9) > 0.9);
}

#[test]
fn validate_rejects_bad_parameters() {
    assert!(Ease::Smooth { inflection: 0.0 }.validate().is_err());
    assert!(Ease::Smooth { inflection: -1.0 }.validate().is_err());
    assert!(
        Ease::Smooth {
            inflection: f64::NAN
        }
        .validate()
        .is_err()
    );
    assert!(
        Ease::SmoothStep {
            order: MAX_SMOOTHSTEP_ORDER + 1
        }
        .validate()
        .is_err()
    );
    assert!(Ease::reference().validate().is_ok());
    assert!(Ease::Linear.validate().is_ok());
}

#[test]
fn closures_are_easing_strategies() {
    fn through<E: Easing + ?Sized>(e: &E, t: f64) -> f64 {
        e.apply(t)
    }
    let square = |t: f64| t * t;
    assert_eq!(through(&square, 0.5), 0.25);
    assert_eq!(through(&Ease::InQuad, 0.5), 0.25);
    let dynamic: &dyn Easing = &Ease::Linear;
    assert_eq!(through(dynamic, 0.3), 0.3);
}

#[test]
fn serde_uses_snake_case_tags() {
    let json = serde_json::to_string(&Ease::reference()).unwrap();
    assert_eq!(json, r#"{"smooth":{"inflection":7.0}}"#);
    let back: Ease = serde_json::from_str(r#""in_out_cubic""#).unwrap();
    assert_eq!(back, Ease::InOutCubic);
    let step: Ease = serde_json::from_str(r#"{"smooth_step":{"order":3}}"#).unwrap();
    assert_eq!(step, Ease::SmoothStep { order: 3 });
}

#[test]
fn vanishing_inflection_is_rejected_and_degrades_to_linear() {
    for inflection in [1e-20, 1e-17, f64::MIN_POSITIVE] {
        let ease = Ease::Smooth { inflection };
        assert!(ease.validate().is_err(), "{inflection}");
        for i in 0..=10 {
            let t = f64::from(i) / 10.0;
            let v = ease.apply(t);
            assert!(v.is_finite(), "{inflection} at {t}");
            assert_eq!(v, t);
        }
    }
}

#[test]
fn small_but_usable_inflection_stays_finite() {
    let ease = Ease::Smooth { inflection: 1e-6 };
    assert!(ease.validate().is_ok());
    for i in 0..=10 {
        let t = f64::from(i) / 10.0;
        let v = ease.apply(t);
        assert!((0.0..=1.0).contains(&v));
        assert!((v - t).abs() < 1e-6);
    }
}

#[test]
fn unvalidated_bad_inflections_never_produce_nan() {
    for inflection in [0.0, -3.0, f64::NAN, f64::INFINITY] {
        let v = Ease::Smooth { inflection }.apply(0.5);
        assert!(v.is_finite(), "{inflection}");
    }
}

#[test]
fn oversized_smoothstep_order_saturates() {
    let capped = Ease::SmoothStep {
        order: MAX_SMOOTHSTEP_ORDER,
    };
    let over = Ease::SmoothStep { order: 40 };
    assert!(over.validate().is_err());
    for i in 0..=20 {
        let t = f64::from(i) / 20.0;
        assert_eq!(over.apply(t), capped.apply(t));
    }
}
