//! Prints sampled centerline points and the bounding box of a spiral
//! segment given on the command line.

use road_geom::Spiral;

fn main() {
    env_logger::init(); // RUST_LOG=debug surfaces the bbox extrema summary

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() != 7 {
        eprintln!("usage: spiral_bbox <s0> <x0> <y0> <hdg0> <length> <curv_start> <curv_end>");
        std::process::exit(1);
    }
    let values: Vec<f64> = args.iter().map(|arg| arg.parse().unwrap()).collect();

    let spiral = match Spiral::create(
        values[0], values[1], values[2], values[3], values[4], values[5], values[6],
    ) {
        Ok(spiral) => spiral,
        Err(err) => {
            eprintln!("invalid geometry: {err}");
            std::process::exit(1);
        }
    };

    log::info!(
        "c_dot={} s_start={:?} s_end={:?}",
        spiral.c_dot(),
        spiral.s_start(),
        spiral.s_end()
    );

    for [x, y] in spiral.get_points_num(21) {
        println!("{x} {y}");
    }

    let bbox = spiral.get_bbox();
    println!(
        "bbox min ({}, {}) max ({}, {})",
        bbox.min.x, bbox.min.y, bbox.max.x, bbox.max.y
    );
}
