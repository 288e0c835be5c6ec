//! Basic usage example for cloudtxt
//!
//! This example demonstrates:
//! - Writing a point cloud as text
//! - Loading it back from disk
//! - Loading from memory with collected diagnostics
//! - Handling a malformed file

use cloudtxt_core::{Point3D, Point3f, PointCloud3D};
use nalgebra::Vector3;
use cloudtxt_io::{
    read_point_cloud, write_point_cloud, CollectingSink, LoadError, MemoryLineSource,
    PointCloudLoader,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    println!("cloudtxt Basic Usage Example");
    println!("============================");

    let cloud: PointCloud3D = [
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
    ]
    .into_iter()
    .map(Point3D::from)
    .collect();

    let path = std::env::temp_dir().join("cloudtxt_basic_usage.txt");
    write_point_cloud(&cloud, &path)?;
    println!("\nWrote {} points to {}", cloud.len(), path.display());

    let loaded = read_point_cloud(&path)?;
    println!("Loaded back {} points, identical: {}", loaded.len(), loaded == cloud);
    print!("{}", loaded);

    let centroid = loaded
        .iter()
        .map(|p| Point3f::from(*p).coords)
        .sum::<Vector3<f32>>()
        / loaded.len() as f32;
    println!("Centroid: ({:.3}, {:.3}, {:.3})", centroid.x, centroid.y, centroid.z);

    std::fs::remove_file(&path)?;

    println!("\nLoading a malformed file from memory:");
    let sink = CollectingSink::new();
    let loader = PointCloudLoader::with_parts(
        MemoryLineSource::new().with_file("bad.txt", ["x y z", "1 2 3", "4 5"]),
        &sink,
    );
    match loader.load("bad.txt") {
        Err(LoadError::MalformedLine { line, fields }) => {
            println!("   line {} has {} fields", line, fields)
        }
        other => println!("   unexpected outcome: {:?}", other),
    }
    for (severity, message) in sink.take() {
        println!("   [{:?}] {}", severity, message);
    }

    Ok(())
}
