//! Line-oriented turn protocol.
//!
//! The catalog section arrives once at match start; every turn then sends
//! its records in a fixed order, each list prefixed by its length. Commands
//! go back one line per owned drone.

use std::io::{BufRead, Write};

use glam::IVec2;

use seabed_core::catalog::CreatureCatalog;
use seabed_core::commands::DroneCommand;
use seabed_core::enums::Quadrant;
use seabed_core::error::{Result, SeabedError};
use seabed_core::records::*;

/// One parsed turn plus the records that were dropped while reading it.
#[derive(Debug, Default)]
pub struct ParsedTurn {
    pub input: TurnInput,
    pub dropped: Vec<SeabedError>,
}

pub struct ProtocolReader<R> {
    reader: R,
    buffer: String,
}

impl<R: BufRead> ProtocolReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: String::new(),
        }
    }

    /// Next non-empty line, or `None` at end of input.
    fn try_line(&mut self) -> Result<Option<&str>> {
        loop {
            self.buffer.clear();
            if self.reader.read_line(&mut self.buffer)? == 0 {
                return Ok(None);
            }
            if !self.buffer.trim().is_empty() {
                return Ok(Some(self.buffer.trim()));
            }
        }
    }

    fn line(&mut self, what: &'static str) -> Result<&str> {
        self.try_line()?.ok_or(SeabedError::UnexpectedEof(what))
    }

    fn ints<const N: usize>(&mut self, what: &'static str) -> Result<[i32; N]> {
        let line = self.line(what)?;
        parse_ints::<N>(line, what)
    }

    fn int(&mut self, what: &'static str) -> Result<i32> {
        let [value] = self.ints::<1>(what)?;
        Ok(value)
    }

    fn count(&mut self, what: &'static str) -> Result<usize> {
        let value = self.int(what)?;
        usize::try_from(value)
            .map_err(|_| SeabedError::MalformedProtocol(format!("negative {what}: {value}")))
    }

    /// One fixed-width row. A malformed row is recorded in `failed` and
    /// skipped so the rest of the turn stays aligned.
    fn row<const N: usize>(
        &mut self,
        what: &'static str,
        failed: &mut Option<SeabedError>,
    ) -> Result<Option<[i32; N]>> {
        let line = self.line(what)?;
        keep(failed, parse_ints::<N>(line, what))
    }

    fn id_list(&mut self, what: &'static str, failed: &mut Option<SeabedError>) -> Result<Vec<i32>> {
        let count = self.count(what)?;
        let mut ids = Vec::with_capacity(count);
        for _ in 0..count {
            if let Some([id]) = self.row::<1>(what, failed)? {
                ids.push(id);
            }
        }
        Ok(ids)
    }

    fn drones(&mut self, failed: &mut Option<SeabedError>) -> Result<Vec<DroneReading>> {
        let count = self.count("drone count")?;
        let mut drones = Vec::with_capacity(count);
        for _ in 0..count {
            if let Some([id, x, y, emergency, battery]) = self.row::<5>("drone", failed)? {
                drones.push(DroneReading {
                    id,
                    position: IVec2::new(x, y),
                    emergency: emergency != 0,
                    battery,
                });
            }
        }
        Ok(drones)
    }

    /// Read the one-time catalog section.
    pub fn read_catalog(&mut self) -> Result<CreatureCatalog> {
        let count = self.count("creature count")?;
        let mut records = Vec::with_capacity(count);
        for _ in 0..count {
            let [id, color_code, species_code] = self.ints::<3>("creature")?;
            records.push(CatalogRecord {
                id,
                color_code,
                species_code,
            });
        }
        CreatureCatalog::from_records(records)
    }

    /// Read one turn. Returns `None` when the input ends cleanly before the
    /// turn starts.
    ///
    /// Every line of the turn is consumed even when one of them is malformed;
    /// the first such error is then returned for the whole turn. A malformed
    /// section count still aborts at once since the section length is lost.
    pub fn read_turn(&mut self) -> Result<Option<ParsedTurn>> {
        let mut failed = None;
        let own_score = match self.try_line()? {
            None => return Ok(None),
            Some(line) => keep(&mut failed, parse_ints::<1>(line, "own score"))?,
        };

        let mut turn = ParsedTurn::default();
        let input = &mut turn.input;
        input.own_score = own_score.map_or(0, |[score]| score);
        input.foe_score = self
            .row::<1>("foe score", &mut failed)?
            .map_or(0, |[score]| score);
        input.own_scans = self.id_list("own scan", &mut failed)?;
        input.foe_scans = self.id_list("foe scan", &mut failed)?;
        input.own_drones = self.drones(&mut failed)?;
        input.foe_drones = self.drones(&mut failed)?;

        let scan_count = self.count("drone scan count")?;
        for _ in 0..scan_count {
            if let Some([drone_id, creature_id]) = self.row::<2>("drone scan", &mut failed)? {
                input.drone_scans.push(ScanEvent {
                    drone_id,
                    creature_id,
                });
            }
        }

        let visible_count = self.count("visible creature count")?;
        for _ in 0..visible_count {
            if let Some([id, x, y, vx, vy]) = self.row::<5>("visible creature", &mut failed)? {
                input.visible_creatures.push(CreatureReading {
                    id,
                    position: IVec2::new(x, y),
                    velocity: IVec2::new(vx, vy),
                });
            }
        }

        let blip_count = self.count("radar blip count")?;
        for _ in 0..blip_count {
            let line = self.line("radar blip")?;
            match parse_blip(line) {
                Err(err) if err.is_record_local() => turn.dropped.push(err),
                parsed => {
                    if let Some(blip) = keep(&mut failed, parsed)? {
                        input.radar_blips.push(blip);
                    }
                }
            }
        }

        match failed {
            Some(err) => Err(err),
            None => Ok(Some(turn)),
        }
    }
}

/// Pass a parsed row through, or remember the first parse failure and carry
/// on. Stream errors stop the read immediately.
fn keep<T>(failed: &mut Option<SeabedError>, parsed: Result<T>) -> Result<Option<T>> {
    match parsed {
        Ok(value) => Ok(Some(value)),
        Err(err @ (SeabedError::Io(_) | SeabedError::UnexpectedEof(_))) => Err(err),
        Err(err) => {
            if failed.is_none() {
                *failed = Some(err);
            }
            Ok(None)
        }
    }
}

fn parse_ints<const N: usize>(line: &str, what: &'static str) -> Result<[i32; N]> {
    let mut values = [0; N];
    let mut tokens = line.split_whitespace();
    for value in values.iter_mut() {
        let token = tokens.next().ok_or_else(|| {
            SeabedError::MalformedProtocol(format!("{what}: expected {N} fields in {line:?}"))
        })?;
        *value = token.parse().map_err(|_| {
            SeabedError::MalformedProtocol(format!("{what}: invalid integer {token:?}"))
        })?;
    }
    if tokens.next().is_some() {
        return Err(SeabedError::MalformedProtocol(format!(
            "{what}: trailing fields in {line:?}"
        )));
    }
    Ok(values)
}

fn parse_blip(line: &str) -> Result<RadarBlip> {
    let (ids, label) = line.rsplit_once(char::is_whitespace).ok_or_else(|| {
        SeabedError::MalformedProtocol(format!("radar blip: expected 3 fields in {line:?}"))
    })?;
    let [drone_id, creature_id] = parse_ints::<2>(ids, "radar blip")?;
    let quadrant: Quadrant = label.parse()?;
    Ok(RadarBlip {
        drone_id,
        creature_id,
        quadrant,
    })
}

/// Write one line per command and flush so the referee sees the whole turn.
pub fn write_commands<W: Write>(out: &mut W, commands: &[DroneCommand]) -> Result<()> {
    for command in commands {
        writeln!(out, "{command}")?;
    }
    out.flush()?;
    Ok(())
}
