use jelly_physics::helpers::{build_cube, CUBE_FLOOR};
use jelly_physics::types::Float;
use jelly_physics::TIMESTEP;

/// Drop the jello cube onto the floor plane and trace its lowest point.
pub fn main() {
    let mut system = build_cube(3);

    let final_time = 5.0;
    let dt = TIMESTEP;
    let mut t: Float = 0.0;
    let mut next_report = 0.0;
    while t < final_time {
        if t >= next_report {
            println!("t = {:.2}s  lowest mass y = {:.4}", t, lowest_y(&system));
            next_report += 0.5;
        }
        system.step(dt);
        t += dt;
    }

    println!(
        "final lowest mass y = {:.4} (floor at {})",
        lowest_y(&system),
        CUBE_FLOOR
    );
}

fn lowest_y(system: &jelly_physics::system::SpringMassSystem) -> Float {
    system
        .masses
        .iter()
        .map(|m| m.position.y)
        .fold(Float::INFINITY, Float::min)
}
