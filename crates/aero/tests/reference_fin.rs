use approx::assert_relative_eq;
use fin_aero::{FinConfiguration, FinError, FinModel, FlightCondition};
use fin_core::units::{
    in_metres, in_newton_metres, in_newtons, in_pascals, in_radians, in_square_metres,
    kilograms_per_cubic_metre, metres, metres_per_second, radians,
};

// c_r = 0.2 m, c_t = 0.1 m, b = 0.12 m, r_t = 0.04 m, unswept.
const CR: f64 = 0.2;
const CT: f64 = 0.1;
const B: f64 = 0.12;
const RT: f64 = 0.04;

fn reference_model() -> FinModel {
    FinModel::new(
        FinConfiguration::new(metres(CR), metres(CT), metres(B), metres(RT), radians(0.0))
            .expect("reference fin"),
    )
}

fn hand_cna(mach: f64) -> f64 {
    let ar = 2.0 * B / (CR + CT);
    let k = 1.0 + 1.0 / ((B + RT) / RT);
    let beta = (1.0 - mach * mach).sqrt();
    (1.0 / beta) * k * (ar * (CR + CT) * B / (RT * RT)) / (2.0 + (4.0 + ar).sqrt())
}

#[test]
fn reference_geometry() {
    let model = reference_model();
    assert_eq!(model.aspect_ratio(), 2.0 * B / (CR + CT));
    assert_relative_eq!(model.aspect_ratio(), 0.8, max_relative = 1e-12);
    assert_relative_eq!(
        in_square_metres(model.reference_area()),
        0.005027,
        max_relative = 1e-4
    );
    assert_relative_eq!(model.body_interference_factor(), 1.25, max_relative = 1e-12);
}

#[test]
fn reference_cna_at_zero_mach() {
    let cna = reference_model().normal_force_coefficient_slope(0.0).unwrap();
    assert_relative_eq!(cna, hand_cna(0.0), max_relative = 1e-12);
}

#[test]
fn reference_loads_at_fifty_metres_per_second() {
    let model = reference_model();
    let condition = FlightCondition::new(metres_per_second(50.0))
        .with_gust(metres_per_second(9.0))
        .with_density(kilograms_per_cubic_metre(1.225));

    let q = 0.5 * 1.225 * 50.0 * 50.0;
    let alpha = (9.0_f64 / 50.0).atan();
    let mach = 50.0 / 340.0;
    let area = std::f64::consts::PI * RT * RT;
    let lift = q * hand_cna(mach) * alpha * area;
    let arm = (B / 3.0) * (CR + 2.0 * CT) / (CR + CT);
    let moment = lift * arm;
    let tip_load = moment / B;

    let report = model.evaluate(&condition).unwrap();
    assert_relative_eq!(report.dynamic_pressure_pa, 1531.25, max_relative = 1e-12);
    assert_relative_eq!(report.angle_of_attack_rad, 0.1781, epsilon = 1e-4);
    assert_relative_eq!(report.lift_force_n, lift, max_relative = 1e-6);
    assert_relative_eq!(report.root_bending_moment_n_m, moment, max_relative = 1e-6);
    assert_relative_eq!(report.equivalent_tip_load_n, tip_load, max_relative = 1e-6);

    assert_relative_eq!(
        in_pascals(
            model
                .dynamic_pressure(condition.airspeed, condition.air_density)
                .unwrap()
        ),
        q,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        in_radians(
            model
                .angle_of_attack(condition.airspeed, condition.gust_speed)
                .unwrap()
        ),
        alpha,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        in_newtons(model.lift_force(&condition).unwrap()),
        lift,
        max_relative = 1e-6
    );
}

#[test]
fn tip_load_reproduces_root_moment() {
    let model = reference_model();
    let condition = FlightCondition::new(metres_per_second(120.0));
    let moment = in_newton_metres(model.root_bending_moment(&condition).unwrap());
    let tip = in_newtons(model.equivalent_tip_load(&condition).unwrap());
    assert_relative_eq!(tip * in_metres(model.config().span()), moment, max_relative = 1e-12);
}

#[test]
fn still_air_is_rejected() {
    let model = reference_model();
    let err = model
        .equivalent_tip_load(&FlightCondition::new(metres_per_second(0.0)))
        .unwrap_err();
    assert!(matches!(err, FinError::InputDomain(_)));
}

#[test]
fn repeated_calls_are_identical() {
    let model = reference_model();
    let condition = FlightCondition::new(metres_per_second(75.0));
    let first = model.evaluate(&condition).unwrap();
    for _ in 0..5 {
        assert_eq!(model.evaluate(&condition).unwrap(), first);
        assert_eq!(
            model.spanwise_center_of_pressure(),
            reference_model().spanwise_center_of_pressure()
        );
    }
}

#[test]
fn model_is_shareable_across_threads() {
    let model = reference_model();
    let condition = FlightCondition::new(metres_per_second(90.0));
    let expected = model.evaluate(&condition).unwrap();
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(move || model.evaluate(&condition).unwrap()))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().expect("thread"), expected);
    }
}
