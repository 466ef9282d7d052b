use double_evaluation::{Increment, MaxStrategy};
use tracing::info;

fn main() -> anyhow::Result<()> {
    snippet_tracing::init_tracing()?;

    for increment in [Increment::Post, Increment::Pre] {
        let outcome = MaxStrategy::Function.evaluate_with(increment, 1, 2);
        info!(?outcome, "pick_max({})", increment.notation());

        println!("{}: {outcome}", increment.notation());
    }

    Ok(())
}
