//! Delete action: remove a record by id

use atlas_core::{CityId, RoadId};
use tokio::io::{AsyncBufRead, AsyncWrite};

use super::{prompt_field, EntityKind};
use crate::output;
use crate::shell::{Shell, MODEL_MENU};

pub async fn run<R, W>(shell: &mut Shell<R, W>) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    loop {
        shell.write_line(MODEL_MENU).await?;
        let Some(line) = shell.read_line().await? else {
            return Ok(());
        };
        let Some(kind) = EntityKind::from_selector(&line) else {
            continue;
        };

        let label = kind.label();
        let (id, found) = match kind {
            EntityKind::City => {
                let Some(id) = prompt_field::<_, _, CityId>(shell, "id").await? else {
                    return Ok(());
                };
                let found = shell.storage().delete_city(id).await?;
                (id.0, found)
            }
            EntityKind::Road => {
                let Some(id) = prompt_field::<_, _, RoadId>(shell, "id").await? else {
                    return Ok(());
                };
                let found = shell.storage().delete_road(id).await?;
                (id.0, found)
            }
        };

        let message = if found {
            output::entity_deleted(label, id)
        } else {
            output::entity_not_found(label, id)
        };
        shell.write_line(&message).await?;
        return Ok(());
    }
}
