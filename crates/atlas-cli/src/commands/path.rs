//! Path action: list the roads connecting two cities

use atlas_core::{format_duration, PathQuery, PathQueryEngine};
use tokio::io::{AsyncBufRead, AsyncWrite};

use crate::output;
use crate::shell::Shell;

pub async fn run<R, W>(shell: &mut Shell<R, W>) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    loop {
        shell.write_line("source:destination=?").await?;
        let Some(line) = shell.read_line().await? else {
            return Ok(());
        };

        let query: PathQuery = match line.parse() {
            Ok(query) => query,
            Err(e) => {
                shell.write_line(&e.to_string()).await?;
                continue;
            }
        };

        // Both cities must exist before the engine is consulted; the
        // engine itself never validates ids.
        let source = shell.storage().get_city(query.source).await?;
        let destination = shell.storage().get_city(query.destination).await?;
        let (Some(source), Some(destination)) = (source, destination) else {
            shell
                .write_line("Source or destination city not found.")
                .await?;
            continue;
        };

        let roads = shell.storage().get_all_roads().await?;
        let matches =
            PathQueryEngine::find_connecting_roads(query.source, query.destination, &roads);
        tracing::debug!(
            "{} of {} roads connect {} to {}",
            matches.len(),
            roads.len(),
            source.name,
            destination.name
        );

        // Zero matches prints nothing; absence is the signal.
        for m in &matches {
            shell
                .write_line(&output::route_line(
                    &source.name,
                    &destination.name,
                    &m.road.name,
                    &format_duration(m.duration_seconds),
                ))
                .await?;
        }
        return Ok(());
    }
}
