use anyhow::Context;
use rawline::sync_editor::read_line;
use rawline::sync_io::IO;

mod raw_mode;

use raw_mode::RawMode;

const BUF_LEN: usize = 256;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut io = IO::default();

    let (line, len) = {
        let _raw_mode = RawMode::enter().context("failed to put terminal in raw mode")?;

        read_line(BUF_LEN, &mut io).context("failed to read line")?
    };

    println!("Character count: {}", len);
    println!("Output: {}", String::from_utf8_lossy(&line));

    Ok(())
}
