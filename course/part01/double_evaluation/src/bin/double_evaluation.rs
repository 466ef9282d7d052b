use double_evaluation::MaxStrategy;
use tracing::info;

fn main() -> anyhow::Result<()> {
    snippet_tracing::init_tracing()?;

    let outcome = MaxStrategy::NaiveMacro.evaluate(1, 2);
    info!(?outcome, "naive_max!(x++, y++)");

    println!("{outcome}");

    Ok(())
}
