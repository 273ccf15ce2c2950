use jelly_physics::energy::total_energy;
use jelly_physics::helpers::build_single_spring;
use jelly_physics::types::Float;
use jelly_physics::TIMESTEP;
use plotters::prelude::*;

/// Plot the total mechanical energy of the single-spring system as damping
/// bleeds it off.
pub fn main() {
    let mut system = build_single_spring();

    let mut energies: Vec<Float> = vec![total_energy(&system)];

    let final_time = 10.0;
    let dt = TIMESTEP;
    let num_steps = (final_time / dt) as usize;
    for _ in 0..num_steps {
        system.step(dt);
        energies.push(total_energy(&system));
    }

    // Determine y-axis limits based on the minimum and maximum values in the data
    let min_y = energies.iter().cloned().fold(Float::INFINITY, Float::min);
    let max_y = energies
        .iter()
        .cloned()
        .fold(Float::NEG_INFINITY, Float::max);

    // Create a plotting area
    let root = BitMapBackend::new("plot.png", (640, 480)).into_drawing_area();
    let _ = root.fill(&WHITE);

    // Configure the chart
    let mut chart = ChartBuilder::on(&root)
        .caption("Total energy vs. time", ("sans-serif", 20))
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(0.0..final_time, min_y..max_y)
        .unwrap();

    let _ = chart.configure_mesh().draw();

    // Plot the data
    let _ = chart.draw_series(LineSeries::new(
        (0..=num_steps).map(|i| (i as Float * dt, energies[i])),
        &BLUE,
    ));

    // Present the result
    root.present()
        .expect("Unable to present the result to the screen");
}
