//! Line-based referee protocol.
//!
//! Game start: a fish count followed by `id color type` lines.
//! Each turn, in order: my score, foe score, my scans, foe scans, my drones,
//! foe drones, drone scans, visible fish, radar blips. Every list is a count
//! line followed by that many records.

use std::io::{BufRead, Lines};
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};

use seabed_core::catalogue::{FishCatalogue, FishId};
use seabed_core::commands::MovementIntent;
use seabed_core::enums::RadarDirection;
use seabed_core::state::{DroneView, RadarBlip, VisibleFish, WorldSnapshot};
use seabed_core::types::{Position, Velocity};

/// Reads catalogue and turn blocks from the referee.
pub struct ProtocolReader<R> {
    lines: Lines<R>,
    line_no: usize,
}

impl<R: BufRead> ProtocolReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
        }
    }

    /// Next non-empty line, or `None` at end of input.
    fn next_line(&mut self) -> Result<Option<String>> {
        for line in self.lines.by_ref() {
            self.line_no += 1;
            let line = line.with_context(|| format!("failed to read line {}", self.line_no))?;
            if !line.trim().is_empty() {
                return Ok(Some(line));
            }
        }
        Ok(None)
    }

    fn expect_line(&mut self, what: &str) -> Result<String> {
        self.next_line()?
            .ok_or_else(|| anyhow!("unexpected end of input, expected {what}"))
    }

    fn read_value<T>(&mut self, what: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        let line = self.expect_line(what)?;
        parse_field(line.trim(), what).with_context(|| format!("line {}", self.line_no))
    }

    /// Read `count` then that many records with `parse`.
    fn read_list<T>(&mut self, what: &str, parse: impl Fn(&str) -> Result<T>) -> Result<Vec<T>> {
        let count: usize = self.read_value(what)?;
        let mut items = Vec::with_capacity(count);
        for _ in 0..count {
            let line = self.expect_line(what)?;
            let item = parse(&line).with_context(|| format!("line {}: {what}", self.line_no))?;
            items.push(item);
        }
        Ok(items)
    }

    /// The game-start fish catalogue.
    pub fn read_catalogue(&mut self) -> Result<FishCatalogue> {
        let entries = self.read_list("fish catalogue", |line| {
            let [id, color, fish_type] = fields(line)?;
            Ok((
                parse_field::<FishId>(id, "fish id")?,
                parse_field::<i32>(color, "color")?,
                parse_field::<i32>(fish_type, "type")?,
            ))
        })?;
        FishCatalogue::from_entries(entries).context("invalid fish catalogue")
    }

    /// One turn, or `None` when the referee closed the stream between turns.
    pub fn read_turn(&mut self) -> Result<Option<WorldSnapshot>> {
        let Some(line) = self.next_line()? else {
            return Ok(None);
        };
        let my_score: u32 = parse_field(line.trim(), "my score")
            .with_context(|| format!("line {}", self.line_no))?;
        let foe_score: u32 = self.read_value("foe score")?;
        let my_scans: Vec<FishId> =
            self.read_list("my scans", |line| parse_field(line.trim(), "fish id"))?;
        let foe_scans: Vec<FishId> =
            self.read_list("foe scans", |line| parse_field(line.trim(), "fish id"))?;
        let mut my_drones = self.read_list("my drones", parse_drone)?;
        let mut foe_drones = self.read_list("foe drones", parse_drone)?;

        let drone_scans = self.read_list("drone scans", |line| {
            let [drone, fish] = fields(line)?;
            Ok((
                parse_field::<u32>(drone, "drone id")?,
                parse_field::<FishId>(fish, "fish id")?,
            ))
        })?;
        for (drone_id, fish_id) in drone_scans {
            let carrier = my_drones
                .iter_mut()
                .chain(foe_drones.iter_mut())
                .find(|d| d.id == drone_id);
            match carrier {
                Some(drone) => drone.unbanked_scans.push(fish_id),
                None => tracing::warn!(drone = drone_id, fish = fish_id, "scan for unknown drone"),
            }
        }

        let visible_fish = self.read_list("visible fish", |line| {
            let [id, x, y, vx, vy] = fields(line)?;
            Ok(VisibleFish {
                id: parse_field(id, "fish id")?,
                position: Position::new(parse_field(x, "x")?, parse_field(y, "y")?),
                velocity: Velocity::new(parse_field(vx, "vx")?, parse_field(vy, "vy")?),
            })
        })?;
        let radar_blips = self.read_list("radar blips", |line| {
            let [drone, fish, direction] = fields(line)?;
            Ok(RadarBlip {
                drone_id: parse_field(drone, "drone id")?,
                fish_id: parse_field(fish, "fish id")?,
                direction: parse_field::<RadarDirection>(direction, "radar direction")?,
            })
        })?;

        Ok(Some(WorldSnapshot {
            my_score,
            foe_score,
            my_scans,
            foe_scans,
            my_drones,
            foe_drones,
            visible_fish,
            radar_blips,
        }))
    }
}

fn parse_drone(line: &str) -> Result<DroneView> {
    let [id, x, y, dead, battery] = fields(line)?;
    Ok(DroneView {
        id: parse_field(id, "drone id")?,
        position: Position::new(parse_field(x, "x")?, parse_field(y, "y")?),
        alive: parse_field::<u8>(dead, "dead flag")? == 0,
        battery: parse_field(battery, "battery")?,
        unbanked_scans: Vec::new(),
    })
}

/// Split a record into exactly `N` whitespace-separated fields.
fn fields<const N: usize>(line: &str) -> Result<[&str; N]> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let found = parts.len();
    parts
        .try_into()
        .map_err(|_| anyhow!("expected {N} fields, found {found}: {line:?}"))
}

fn parse_field<T>(field: &str, what: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    field
        .parse()
        .with_context(|| format!("invalid {what}: {field:?}"))
}

/// Render an intent as a referee command, clamped into `[0, map_size)`.
pub fn format_intent(intent: &MovementIntent, map_size: i32) -> String {
    match intent.clamped(map_size) {
        MovementIntent::Move { target, light } => {
            format!("MOVE {} {} {}", target.x, target.y, u8::from(light))
        }
        MovementIntent::Wait { light } => format!("WAIT {}", u8::from(light)),
    }
}
