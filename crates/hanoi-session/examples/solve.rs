//! Solve a few rounds with the classic algorithm and verify every record.
//!
//! ```text
//! RUST_LOG=debug cargo run -p hanoi-session --example solve -- 5
//! ```

use std::error::Error;

use hanoi_core::classic_solution;
use hanoi_record::verify_file;
use hanoi_session::{MoveOutcome, Session, SessionConfig};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let disks = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => 4,
    };
    let dir = tempfile::tempdir()?;
    let mut session = Session::new(SessionConfig {
        disks,
        username: "solver".into(),
        records_dir: dir.path().to_path_buf(),
        ..SessionConfig::default()
    })?;

    // 0 -> 2 -> 1 -> 0
    let mut finished = Vec::new();
    for (from, to, via) in [(0, 2, 1), (2, 1, 0), (1, 0, 2)] {
        for (src, dst) in classic_solution(disks, from, to, via) {
            if let MoveOutcome::RoundComplete { record, .. } = session.try_move(src, dst)? {
                finished.push(record);
            }
        }
    }
    session.quit()?;

    for record in &finished {
        let header = verify_file(&record.path)?;
        println!(
            "{}: {} moves, checksum {:#018x}, user {}",
            record.path.display(),
            header.move_count,
            header.checksum,
            header.username()
        );
    }
    Ok(())
}
