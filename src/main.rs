use std::f64::consts::TAU;
use std::time::Instant;

use dubins_planner::{Planner, PlannerAttributes, Pose2d};

fn main() {
    let planner = Planner::new(&PlannerAttributes::from_steering(2.7, 0.6, 0.5))
        .expect("Invalid planner attributes");

    // Goals spread around a ring, each facing a different direction
    let start = Pose2d::origin();
    let goals = (0..360)
        .map(|i| {
            let angle = TAU * (i as f64) / 360.0;
            let dist = 5.0 + (i % 40) as f64;
            Pose2d::from_xy(dist * angle.cos(), dist * angle.sin(), 7.0 * angle)
        })
        .collect::<Vec<_>>();

    println!("Planning...");
    const NUM_ROUNDS: u32 = 100;
    loop {
        let begin = Instant::now();
        let mut num_points = 0;
        for _ in 0..NUM_ROUNDS {
            for goal in &goals {
                match planner.plan(start, *goal) {
                    Ok(points) => num_points += points.len(),
                    Err(err) => println!("Failed to plan to {:?}: {}", goal, err),
                }
            }
        }
        let elapsed = begin.elapsed();
        let plan = elapsed / (NUM_ROUNDS * goals.len() as u32);
        println!(
            "Avg. plan: {:?} --> {:.0} plans/s ({:.0} points/plan)",
            plan,
            1.0 / plan.as_secs_f64(),
            num_points as f64 / (NUM_ROUNDS as f64 * goals.len() as f64),
        )
    }
}
