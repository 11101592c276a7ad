use anyhow::Result;

fn main() -> Result<()> {
    judgewrap::cli::run()
}
