use crate::app::render::{render_chart, render_parts, render_table, APPLICATION_LOGIC};
use crate::app::report;
use crate::core::session::Session;
use crate::core::{Distance, PartLookup, PartSpec, Storage};
use crate::utils::error::{Result, WearError};
use crate::utils::validation::parse_distance;
use std::io::{BufRead, Write};

pub const HELP: &str = "\
Commands:
  parts                          list parts and lifespans
  calc <last> <current> <part>   calculate wear (part by number or exact name)
  odo [km]                       set or clear the current odometer reading
  table                          show the parts table
  chart [km]                     show the wear chart
  logic                          show the calculation procedure
  export <path>                  write the table to .csv, .tsv or .json
  help                           show this help
  quit                           leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Parts,
    Calc {
        last: String,
        current: String,
        part: String,
    },
    Odometer(Option<String>),
    Table,
    Chart(Option<String>),
    Logic,
    Export(String),
    Help,
    Quit,
}

/// Parses one input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (line, ""),
    };
    let optional = |rest: &str| (!rest.is_empty()).then(|| rest.to_string());

    let command = match keyword.to_ascii_lowercase().as_str() {
        "" => return Ok(None),
        "parts" | "list" => Command::Parts,
        "calc" | "calculate" => {
            let mut tokens = rest.splitn(3, char::is_whitespace);
            match (tokens.next(), tokens.next(), tokens.next()) {
                (Some(last), Some(current), Some(part)) if !part.trim().is_empty() => {
                    Command::Calc {
                        last: last.to_string(),
                        current: current.to_string(),
                        part: part.trim().to_string(),
                    }
                }
                _ => {
                    return Err(WearError::InputError {
                        field: "calc".to_string(),
                        reason: "usage: calc <last> <current> <part>".to_string(),
                    })
                }
            }
        }
        "odo" | "odometer" => Command::Odometer(optional(rest)),
        "table" => Command::Table,
        "chart" | "graph" => Command::Chart(optional(rest)),
        "logic" | "pseudocode" => Command::Logic,
        "export" => match optional(rest) {
            Some(path) => Command::Export(path),
            None => {
                return Err(WearError::InputError {
                    field: "export".to_string(),
                    reason: "usage: export <path>".to_string(),
                })
            }
        },
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => {
            return Err(WearError::InputError {
                field: "command".to_string(),
                reason: format!("unknown command '{}', type 'help'", other),
            })
        }
    };
    Ok(Some(command))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Continue(String),
    Quit,
}

/// Command handlers over one session. Each handler takes the raw inputs and
/// returns the text to show.
pub struct Shell<L: PartLookup, S: Storage> {
    session: Session<L>,
    storage: S,
    max_distance: Distance,
    chart_width: usize,
    report_format: Option<String>,
}

impl<L: PartLookup, S: Storage> Shell<L, S> {
    pub fn new(session: Session<L>, storage: S, max_distance: Distance, chart_width: usize) -> Self {
        Self {
            session,
            storage,
            max_distance,
            chart_width,
            report_format: None,
        }
    }

    pub fn with_report_format(mut self, format: Option<String>) -> Self {
        self.report_format = format;
        self
    }

    pub fn session(&self) -> &Session<L> {
        &self.session
    }

    /// Resolves a selector number or passes the name through untouched.
    pub fn resolve_part(&self, input: &str) -> String {
        input
            .parse::<usize>()
            .ok()
            .and_then(|position| self.session.catalog().name_at(position))
            .map_or_else(|| input.to_string(), str::to_string)
    }

    pub fn parts(&self) -> String {
        let catalog = self.session.catalog();
        render_parts(catalog.part_names().into_iter().filter_map(|name| {
            catalog
                .lifespan_of(name)
                .map(|lifespan| PartSpec::new(name, lifespan))
        }))
    }

    /// Handles a calculation. A declined calculation adds no record and is
    /// reported as a notice rather than an error.
    pub fn calculate(&mut self, part: &str, last: &str, current: &str) -> Result<String> {
        let last = parse_distance("last service", last, self.max_distance)?;
        let current = parse_distance("current odometer", current, self.max_distance)?;
        let part = self.resolve_part(part);

        let submitted = self.session.submit(&part, last, current).map(|row| {
            format!(
                "{}: {}% worn, status {} (action: {})\n",
                row.part_name, row.wear_percent, row.status, row.action
            )
        });

        match submitted {
            Ok(summary) => Ok(summary + &self.chart(None)?),
            Err(rejection) => {
                let err = WearError::from(rejection);
                Ok(format!(
                    "{}\n{}\n",
                    err.user_friendly_message(),
                    err.recovery_suggestion()
                ))
            }
        }
    }

    pub fn set_odometer(&mut self, reading: Option<&str>) -> Result<String> {
        let reading = reading
            .map(|km| parse_distance("current odometer", km, self.max_distance))
            .transpose()?;
        self.session.set_odometer(reading);
        Ok(match reading {
            Some(km) => format!("Odometer set to {} km\n", km),
            None => "Odometer cleared; the chart will use an estimate\n".to_string(),
        })
    }

    pub fn table(&self) -> String {
        render_table(self.session.rows())
    }

    pub fn chart(&self, reading: Option<&str>) -> Result<String> {
        let reading = reading
            .map(|km| parse_distance("current odometer", km, self.max_distance))
            .transpose()?;
        Ok(render_chart(&self.session.chart(reading), self.chart_width))
    }

    pub fn export(&self, path: &str) -> Result<String> {
        let written = report::export(
            &self.session,
            &self.storage,
            path,
            self.report_format.as_deref(),
        )?;
        Ok(format!(
            "Saved {} rows to {}\n",
            self.session.rows().len(),
            written.display()
        ))
    }

    pub fn execute(&mut self, command: Command) -> Result<Outcome> {
        let text = match command {
            Command::Parts => self.parts(),
            Command::Calc {
                last,
                current,
                part,
            } => self.calculate(&part, &last, &current)?,
            Command::Odometer(reading) => self.set_odometer(reading.as_deref())?,
            Command::Table => self.table(),
            Command::Chart(reading) => self.chart(reading.as_deref())?,
            Command::Logic => format!("{}\n", APPLICATION_LOGIC),
            Command::Export(path) => self.export(&path)?,
            Command::Help => format!("{}\n", HELP),
            Command::Quit => return Ok(Outcome::Quit),
        };
        Ok(Outcome::Continue(text))
    }

    /// Reads commands until EOF or `quit`. Bad input, including lines that
    /// are not UTF-8, is reported and the loop carries on; only I/O failures
    /// on the streams end it.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<()> {
        writeln!(output, "Vehicle part wear logger. Type 'help' for commands.")?;
        write!(output, "> ")?;
        output.flush()?;

        let mut buffer = Vec::new();
        loop {
            buffer.clear();
            if input.read_until(b'\n', &mut buffer)? == 0 {
                break;
            }

            let outcome = match std::str::from_utf8(&buffer) {
                Ok(line) => parse_command(line).and_then(|command| match command {
                    Some(command) => self.execute(command),
                    None => Ok(Outcome::Continue(String::new())),
                }),
                Err(_) => Err(WearError::InputError {
                    field: "input".to_string(),
                    reason: "line is not valid UTF-8 and was ignored".to_string(),
                }),
            };

            match outcome {
                Ok(Outcome::Quit) => break,
                Ok(Outcome::Continue(text)) => write!(output, "{}", text)?,
                Err(e) => {
                    tracing::debug!("Command failed: {}", e);
                    writeln!(output, "{}", e.user_friendly_message())?;
                }
            }
            write!(output, "> ")?;
            output.flush()?;
        }

        tracing::info!(
            "Session {} closed with {} records",
            self.session.id(),
            self.session.len()
        );
        Ok(())
    }
}
