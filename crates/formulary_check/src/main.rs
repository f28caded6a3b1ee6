use formulary::{area_of_circle, average, utility, volume_of_cylinder};

/// One demonstration case: a labelled invocation with its hand-written
/// expected output from the exercise set.
struct Case {
    label: &'static str,
    expected: f64,
    got: f64,
}

/// Expected values are quoted to two decimals, so allow half a unit in the
/// last quoted place.
const TOLERANCE: f64 = 0.005;

fn cases() -> Vec<Case> {
    [
        ("average(10, 20)", 15.0, average(10., 20.)),
        ("average(2.5, 3.0)", 2.75, average(2.5, 3.0)),
        ("average(5, 10)", 7.5, average(5., 10.)),
        ("area_of_circle(1)", 3.14, area_of_circle(1.)),
        ("area_of_circle(2)", 12.56, area_of_circle(2.)),
        ("area_of_circle(3)", 28.26, area_of_circle(3.)),
        ("volume_of_cylinder(2, 5)", 62.80, volume_of_cylinder(2., 5.)),
        ("volume_of_cylinder(3, 2)", 56.52, volume_of_cylinder(3., 2.)),
        ("volume_of_cylinder(1, 4)", 12.56, volume_of_cylinder(1., 4.)),
        ("utility(2, 3, 2)", 1.33, utility(2., 3., 2.)),
        ("utility(1, 5, 3)", 0.04, utility(1., 5., 3.)),
        ("utility(3, 1, 4)", 81.0, utility(3., 1., 4.)),
    ]
    .into_iter()
    .map(|(label, expected, got)| Case {
        label,
        expected,
        got,
    })
    .collect()
}

fn main() -> eyre::Result<()> {
    env_logger::init();

    log::info!("formula check");

    let cases = cases();

    println!(
        "  {:<28} {:>12} {:>12} {:>6}",
        "Evaluating", "Expected", "Got", "Ok"
    );
    println!("{}", "-".repeat(28 + 12 * 2 + 6 + 6));

    let mut failures = 0;
    for case in &cases {
        let ok = (case.got - case.expected).abs() <= TOLERANCE;
        if !ok {
            failures += 1;
            log::warn!(
                "mismatch for {}: expected {}, got {}",
                case.label,
                case.expected,
                case.got
            );
        }
        println!(
            "  {:<28} {:>12.4} {:>12.4} {:>6}",
            case.label,
            case.expected,
            case.got,
            if ok { "yes" } else { "NO" }
        );
    }

    eyre::ensure!(
        failures == 0,
        "{failures} of {} cases outside tolerance",
        cases.len()
    );

    log::info!("all {} cases within tolerance", cases.len());
    Ok(())
}
