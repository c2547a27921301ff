//! Add action: collect field values and store a record

use atlas_core::{City, CityId, NewRoad, Road, RoadId};
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
        match EntityKind::from_selector(&line) {
            Some(EntityKind::City) => return add_cities(shell).await,
            Some(EntityKind::Road) => return add_roads(shell).await,
            None => continue,
        }
    }
}

async fn add_cities<R, W>(shell: &mut Shell<R, W>) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    loop {
        let Some(id) = prompt_field::<_, _, CityId>(shell, "id").await? else {
            return Ok(());
        };
        let Some(name) = prompt_field::<_, _, String>(shell, "name").await? else {
            return Ok(());
        };

        shell.storage().save_city(&City::new(id, name)).await?;
        shell.write_line(&output::entity_added("City", id.0)).await?;

        if !add_another(shell, "City").await? {
            return Ok(());
        }
    }
}

async fn add_roads<R, W>(shell: &mut Shell<R, W>) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    loop {
        let Some(id) = prompt_field::<_, _, RoadId>(shell, "id").await? else {
            return Ok(());
        };
        let Some(name) = prompt_field::<_, _, String>(shell, "name").await? else {
            return Ok(());
        };
        let Some(from) = prompt_field::<_, _, CityId>(shell, "from").await? else {
            return Ok(());
        };
        let Some(to) = prompt_field::<_, _, CityId>(shell, "to").await? else {
            return Ok(());
        };
        let Some(through) = prompt_through(shell).await? else {
            return Ok(());
        };
        let Some(speed_limit) = prompt_field::<_, _, f64>(shell, "speed_limit").await? else {
            return Ok(());
        };
        let length_label = format!("length({})", shell.config().distance_unit);
        let Some(length) = prompt_field::<_, _, f64>(shell, &length_label).await? else {
            return Ok(());
        };
        let Some(bi_directional) = prompt_bi_directional(shell).await? else {
            return Ok(());
        };

        let road = match Road::new(NewRoad {
            id,
            name,
            from,
            to,
            through,
            speed_limit,
            length,
            bi_directional,
        }) {
            Ok(road) => road,
            Err(e) => {
                // Non-positive speed limit or length; start the Add flow over.
                shell.write_line(&e.to_string()).await?;
                continue;
            }
        };

        shell.storage().save_road(&road).await?;
        shell.write_line(&output::entity_added("Road", id.0)).await?;

        if !add_another(shell, "Road").await? {
            return Ok(());
        }
    }
}

/// Ask whether to add another record; `2` (or end of input) returns to the
/// main menu, anything else adds another
async fn add_another<R, W>(shell: &mut Shell<R, W>, label: &str) -> anyhow::Result<bool>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    shell
        .write_line(&format!(
            "Select your next action\n1. Add another {label}\n2. Main Menu"
        ))
        .await?;
    match shell.read_line().await? {
        None => Ok(false),
        Some(choice) => Ok(choice.trim() != "2"),
    }
}

async fn prompt_through<R, W>(shell: &mut Shell<R, W>) -> anyhow::Result<Option<Vec<CityId>>>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    loop {
        shell.write_line("through=?").await?;
        let Some(line) = shell.read_line().await? else {
            return Ok(None);
        };
        match parse_id_list(&line) {
            Ok(ids) => return Ok(Some(ids)),
            Err(reason) => {
                shell
                    .write_line(&format!("Invalid value for through: {reason}"))
                    .await?
            }
        }
    }
}

async fn prompt_bi_directional<R, W>(shell: &mut Shell<R, W>) -> anyhow::Result<Option<bool>>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    loop {
        shell.write_line("bi_directional=?").await?;
        let Some(line) = shell.read_line().await? else {
            return Ok(None);
        };
        match parse_bool(&line) {
            Some(value) => return Ok(Some(value)),
            None => {
                shell
                    .write_line("Invalid value for bi_directional: expected true or false")
                    .await?
            }
        }
    }
}

/// Parse the console's waypoint list form: comma-separated ids, brackets
/// and spaces tolerated, empty input means no waypoints
fn parse_id_list(s: &str) -> Result<Vec<CityId>, String> {
    let cleaned: String = s
        .chars()
        .filter(|c| !matches!(c, '[' | ']' | ' '))
        .collect();
    cleaned
        .split(',')
        .filter(|part| !part.is_empty())
        .map(|part| part.parse::<CityId>().map_err(|e| e.to_string()))
        .collect()
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
