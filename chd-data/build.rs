use flate2::write::GzEncoder;
use flate2::Compression;
use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const FULL_DATASET_ROWS: usize = 20_640;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest = Path::new(&out_dir).join("california_housing.csv.gz");

    // Compress the housing CSV into OUT_DIR for include_bytes.
    // The full export is ~1.9MB of text; gzip brings it well under 1MB.
    let src = Path::new("../fixtures/california_housing.csv");
    let csv_data = if src.exists() {
        fs::read(src).unwrap()
    } else {
        b"MedInc,HouseAge,AveRooms,AveBedrms,Population,AveOccup,Latitude,Longitude,MedHouseVal\n".to_vec()
    };

    // Data rows, not counting the header or blank lines
    let rows = String::from_utf8_lossy(&csv_data)
        .lines()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .count();
    if rows < FULL_DATASET_ROWS {
        println!(
            "cargo:warning=fixtures/california_housing.csv has {} rows, the full dataset has {}; run `chd-cli import` to regenerate it",
            rows, FULL_DATASET_ROWS
        );
    }
    fs::write(
        Path::new(&out_dir).join("embedded_rows.rs"),
        format!("/// Data rows in the embedded fixture.\npub const EMBEDDED_ROWS: usize = {};\n", rows),
    )
    .unwrap();

    let mut encoder = GzEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(&csv_data).unwrap();
    fs::write(&dest, encoder.finish().unwrap()).unwrap();

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/california_housing.csv");
}
