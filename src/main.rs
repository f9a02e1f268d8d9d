mod document;
mod fixer;

const TARGET_PATH: &str = "docs/runbooks/README.md";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // Arguments are ignored; the target is fixed.
    let report = fixer::fix_file(TARGET_PATH)?;
    report.log(TARGET_PATH);

    println!("Fixed {}", TARGET_PATH);
    Ok(())
}
