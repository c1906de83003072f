// main.rs
//
// Minimal example of each function of trs4.

use nalgebra::Vector3;
use trs4::{Trs, compose, decompose, format_matrix_literal, parse_matrix_literal, to_float32_array_snippet};

fn main() {
    // 1) compose() a transform from translation, rotation (degrees), scale
    let m = compose(
        &Vector3::new(1.0, 2.0, 3.0),
        &Vector3::new(30.0, 45.0, 60.0),
        &Vector3::new(1.0, 2.0, 1.5),
    );
    println!("composed:\n{}", format_matrix_literal(&m));

    // 2) the snippet handed to the hosting engine's source
    println!("{}\n", to_float32_array_snippet(&m));

    // 3) decompose() it back into translation/rotation/scale
    let trs = decompose(&m);
    println!(
        "position: {:.2} {:.2} {:.2}",
        trs.translation.x, trs.translation.y, trs.translation.z
    );
    println!(
        "rotation: {:.2} {:.2} {:.2}",
        trs.rotation.x, trs.rotation.y, trs.rotation.z
    );
    println!(
        "scale:    {:.2} {:.2} {:.2}\n",
        trs.scale.x, trs.scale.y, trs.scale.z
    );

    // 4) parse a pasted literal; shape violations surface as ShapeError
    let pasted = "[1.0, 0.0, 0.0, 4.0,
                   0.0, 1.0, 0.0, -2.0,
                   0.0, 0.0, 1.0, 0.5,
                   0.0, 0.0, 0.0, 1.0]";
    match parse_matrix_literal(pasted) {
        Ok(parsed) => {
            let t = decompose(&parsed).translation;
            println!("parsed translation: {:.2} {:.2} {:.2}\n", t.x, t.y, t.z);
        },
        Err(e) => println!("parse failed: {}", e),
    }

    // 5) gimbal lock: at y = 90 degrees, z is pinned to zero and the net
    //    x/z rotation is carried by x alone
    let locked = decompose(&compose(
        &Vector3::zeros(),
        &Vector3::new(25.0, 90.0, 10.0),
        &Vector3::new(1.0, 1.0, 1.0),
    ));
    println!(
        "gimbal locked: x {:.2}  y {:.2}  z {:.2}",
        locked.rotation.x, locked.rotation.y, locked.rotation.z
    );

    // 6) Trs round-trip helpers
    let identity = Trs::identity();
    assert_eq!(Trs::from_matrix(&identity.to_matrix()), identity);
}
