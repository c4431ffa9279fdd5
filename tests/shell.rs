use relcalc::{Calculator, Shell};

fn session(script: &str) -> String {
    let mut out = Vec::new();
    Shell::new(Calculator::default(), script.as_bytes(), &mut out)
        .run()
        .unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn gamma_from_fraction_of_c() {
    let out = session("1\n0.99c\n4\n");
    assert!(out.contains("Lorentz Factor is: 7.08881205"), "{out}");
}

#[test]
fn gamma_from_km_per_s() {
    let out = session("1\n3000\n4\n");
    assert!(out.contains("Lorentz Factor is: 1.00005000375031"), "{out}");
}

#[test]
fn gamma_rejects_light_speed_and_text() {
    let out = session("1\n300000\n1\nwarp\n4\n");
    let invalid = "Invalid speed. Relative speed must be a number and cannot be greater than c (300000 km/s).";
    assert_eq!(out.matches(invalid).count(), 2, "{out}");
    assert!(out.contains("Bye!"));
}

#[test]
fn speed_from_gamma_reports_three_units() {
    let out = session("2\n1.5\n4\n");
    assert!(
        out.contains("Relative Speed is: 223606797.7500 m/s = 223606.7977 km/s = 0.7453559925c"),
        "{out}"
    );
}

#[test]
fn speed_from_gamma_below_one() {
    let out = session("2\n0\n2\nx\n4\n");
    assert_eq!(
        out.matches("Invalid Lorentz Factor. It must be greater than or equal to 1.").count(),
        2
    );
}

#[test]
fn infinite_gamma_has_no_speed() {
    let out = session("2\ninf\n4\n");
    assert!(out.contains("Invalid Lorentz Factor."), "{out}");
    assert!(!out.contains("Relative Speed is"), "{out}");
}

#[test]
fn lorentz_transformation() {
    let out = session("3\n0.1c\n0\n10\n4\n");
    assert!(out.contains("Lab location: 1.01 light-seconds"), "{out}");
    assert!(out.contains("Lab time: 10.05 seconds"), "{out}");
}

#[test]
fn lorentz_transformation_bad_input_returns_to_menu() {
    let out = session("3\n0.1c\nhere\n10\n3\n1c\n0\n1\n4\n");
    assert!(out.contains("Enter numbers only. Please try again."));
    assert!(out.contains("Invalid speed."));
    assert!(out.contains("Bye!"));
}

#[test]
fn input_ending_mid_command_stops() {
    let out = session("3\n0.5c\n");
    assert!(!out.contains("Lab location"));
}
