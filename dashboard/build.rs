use std::env;
use std::fs;
use std::path::Path;

/// (fixture path, file name in OUT_DIR, fallback contents)
const FIXTURES: [(&str, &str, &str); 5] = [
    (
        "../fixtures/state_series.csv",
        "state_series.csv",
        "state,date,case_total,out_death,out_severe,pop_infect_rate,case_severe_rate,case_death_rate,severe_death_rate\n",
    ),
    (
        "../fixtures/county_series.csv",
        "county_series.csv",
        "state,county,date,case_total,out_death\n",
    ),
    (
        "../fixtures/demography.csv",
        "demography.csv",
        "category,group,case_total,out_severe,out_death\n",
    ),
    (
        "../fixtures/plot/state_map.json",
        "state_map.json",
        "{\"data\":[],\"layout\":{}}",
    ),
    (
        "../fixtures/plot/county_map.json",
        "county_map.json",
        "{\"data\":[],\"layout\":{}}",
    ),
];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Copy each extract into OUT_DIR for include_str, or write a header-only
    // stand-in so the app still builds (and shows empty charts) without data.
    for (src, name, fallback) in FIXTURES {
        let src_path = Path::new(src);
        let dest = Path::new(&out_dir).join(name);
        if src_path.exists() {
            fs::copy(src_path, dest).unwrap();
        } else {
            fs::write(dest, fallback).unwrap();
        }
        println!("cargo:rerun-if-changed={}", src);
    }

    println!("cargo:rerun-if-changed=build.rs");
}
