use relcalc::{C, Calculator, DomainError};

#[test]
fn gamma_is_at_least_one_and_increasing_below_c() {
    let calc = Calculator::default();
    let mut previous = calc.speed_to_gamma(0.0).unwrap();
    assert_eq!(previous, 1.0);
    for i in 1..1000 {
        let v = C * i as f64 / 1000.0;
        let gamma = calc.speed_to_gamma(v).unwrap();
        assert!(gamma >= 1.0);
        assert!(gamma > previous, "gamma({v}) = {gamma} <= {previous}");
        previous = gamma;
    }
}

#[test]
fn speed_at_or_above_c_has_no_gamma() {
    let calc = Calculator::default();
    for v in [C, C + 1.0, 2.0 * C, 1e12] {
        assert_eq!(
            calc.speed_to_gamma(v),
            Err(DomainError::SpeedOfLightExceeded { speed: v, c: C })
        );
    }
}

#[test]
fn speed_is_non_negative_and_increasing_in_gamma() {
    let calc = Calculator::default();
    let mut previous = calc.gamma_to_speed(1.0).unwrap();
    assert_eq!(previous, 0.0);
    for i in 1..500 {
        let gamma = 1.0 + i as f64 * 0.05;
        let v = calc.gamma_to_speed(gamma).unwrap();
        assert!(v > previous && v < C, "speed({gamma}) = {v}");
        previous = v;
    }
}

#[test]
fn gamma_below_one_has_no_speed() {
    let calc = Calculator::default();
    for gamma in [0.999, 0.5, 0.0, -1.0, -10.0] {
        assert_eq!(calc.gamma_to_speed(gamma), Err(DomainError::GammaBelowOne(gamma)));
    }
}

#[test]
fn speed_gamma_round_trip() {
    let calc = Calculator::default();
    for v in [1_000.0, 3_000_000.0, 1.5e8, 2.5e8, 2.97e8] {
        let back = calc.gamma_to_speed(calc.speed_to_gamma(v).unwrap()).unwrap();
        assert!(((back - v) / v).abs() < 1e-6, "v = {v}, back = {back}");
    }
}

#[test]
fn lab_event_for_resting_rocket_clock() {
    let calc = Calculator::default();
    let rocket = relcalc::Event::new(0.0, 20.0);
    let lab = calc.to_lab_frame(30_000_000.0, rocket).unwrap();
    assert!((lab.location - 2.010_075_630_518_424).abs() < 1e-7);
    assert!((lab.time - 20.100_756_305_184_24).abs() < 1e-7);
}

#[test]
fn transform_preserves_the_interval() {
    // s^2 = t^2 - x^2 with x in light-seconds
    let calc = Calculator::default();
    let (x, t) = (3.0, 7.0);
    for v in [-2.0e8, 0.0, 1.0e8, 2.9e8] {
        let xl = calc.lorentz_location(v, x, t).unwrap();
        let tl = calc.lorentz_time(v, x, t).unwrap();
        assert!(((tl * tl - xl * xl) - (t * t - x * x)).abs() < 1e-6, "v = {v}");
    }
}

#[test]
fn transform_rejects_light_speed() {
    let calc = Calculator::default();
    assert!(matches!(
        calc.lorentz_location(C, 1.0, 1.0),
        Err(DomainError::SpeedOfLightExceeded { .. })
    ));
    assert!(calc.lorentz_time(-C, 1.0, 1.0).is_err());
}
