//! Demonstration of the workout summary pipeline.
//!
//! This example shows how to:
//! 1. Plug a custom sample source into the driver
//! 2. Inspect a training's computed values directly
//! 3. Keep going past bad packages with the skip policy
//!
//! Run with: cargo run --example summary_demo

use workout_tracker::{
    read_package, Config, Driver, ErrorPolicy, SampleSource, WorkoutSample, WorkoutType,
};

/// A fake sensor that replays a week of runs with growing distance.
struct WeeklyRuns {
    day: u32,
}

impl SampleSource for WeeklyRuns {
    fn next_sample(&mut self) -> Option<WorkoutSample> {
        if self.day >= 7 {
            return None;
        }
        self.day += 1;

        // Sunday's package is deliberately short
        if self.day == 7 {
            return Some(WorkoutSample::new("RUN", vec![20000.0, 1.5]));
        }
        let steps = 10_000.0 + 1_000.0 * f64::from(self.day);
        Some(WorkoutSample::new("RUN", vec![steps, 1.0, 72.0]))
    }
}

fn main() {
    println!("Workout Tracker - Summary Demo");
    println!("==============================");
    println!();

    println!("Payload layout per workout type:");
    for workout_type in WorkoutType::ALL {
        println!("  {workout_type}: {} values", workout_type.arity());
    }
    println!();

    match read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]) {
        Ok(training) => {
            println!("Swimming breakdown:");
            println!("  distance: {:.4} km", training.distance());
            println!("  speed:    {:.4} km/h", training.mean_speed());
            println!("  calories: {:.4} kcal", training.spent_calories());
        }
        Err(e) => eprintln!("Error: {e}"),
    }
    println!();

    let config = Config {
        error_policy: ErrorPolicy::Skip,
        ..Config::default()
    };

    println!("A week of runs:");
    let stdout = std::io::stdout();
    match Driver::new(&config).run(&mut WeeklyRuns { day: 0 }, &mut stdout.lock()) {
        Ok(stats) => {
            println!();
            println!("{}", stats.summary());
        }
        Err(e) => eprintln!("Error: {e}"),
    }
}
