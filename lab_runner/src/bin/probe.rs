//! Exercise 1: confirm the OpenCV binding links and report its version.

use anyhow::Result;
use opencv::core;

use vision_lab::report;

fn main() -> Result<()> {
    println!("{}", report::banner("EXERCISE 1: OpenCV environment probe"));

    let runtime = core::get_version_string()?;
    println!("{}", report::bullet("OpenCV runtime version", &runtime));
    println!("{}", report::bullet("OpenCV header version", opencv::core::CV_VERSION));
    println!(
        "{}",
        report::bullet("Number of CPUs reported", core::get_num_threads()?)
    );

    if runtime.is_empty() {
        println!("{}", report::fail("could not query the linked library version"));
    } else {
        println!("{}", report::check("OpenCV is installed and linked"));
    }
    Ok(())
}
