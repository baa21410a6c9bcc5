//! Interactive range editor over the in-process engine.
use clap::Parser;
use colored::Colorize;
use rangeview::RANKS;
use rangeview::app::App;
use rangeview::engine::Local;
use rangeview::engine::Seat;
use rangeview::range::Bucket;
use std::io::Write;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
enum Query {
    #[command(about = "Replace a seat's range with notation", alias = "s")]
    Set {
        #[arg(required = true, value_parser = seat)]
        seat: Seat,
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        range: Vec<String>,
    },
    #[command(about = "Print a seat's 13x13 grid", alias = "g")]
    Show {
        #[arg(required = true, value_parser = seat)]
        seat: Seat,
    },
    #[command(about = "Set one cell of a seat's grid, in percent", alias = "c")]
    Cell {
        #[arg(required = true, value_parser = seat)]
        seat: Seat,
        #[arg(required = true)]
        row: usize,
        #[arg(required = true)]
        col: usize,
        #[arg(required = true)]
        percent: f32,
    },
    #[command(about = "Empty a seat's range")]
    Clear {
        #[arg(required = true, value_parser = seat)]
        seat: Seat,
    },
    #[command(about = "Print a seat's range as notation", alias = "str")]
    Notation {
        #[arg(required = true, value_parser = seat)]
        seat: Seat,
    },
    #[command(about = "Count the combos in a seat's range", alias = "n")]
    Combos {
        #[arg(required = true, value_parser = seat)]
        seat: Seat,
    },
    #[command(about = "Print the engine's per-combo weights", alias = "r")]
    Raw {
        #[arg(required = true, value_parser = seat)]
        seat: Seat,
    },
    #[command(about = "Print the working configuration as JSON", alias = "cfg")]
    Config,
    #[command(about = "Snapshot the working configuration and commit it")]
    Save,
}

fn seat(s: &str) -> Result<Seat, String> {
    Seat::try_from(s)
}

fn paint(bucket: Bucket, percent: f32) -> String {
    let label = format!("{:<4}", bucket.to_string());
    match percent {
        p if p >= 100.0 => label.green().bold().to_string(),
        p if p > 0.0 => label.yellow().to_string(),
        _ => label.dimmed().to_string(),
    }
}

struct Shell(App<Local>);

impl Shell {
    async fn run() {
        log::info!("entering range editor");
        let mut shell = Self(App::new(Local::default()));
        loop {
            print!("> ");
            let ref mut input = String::new();
            if std::io::stdout().flush().is_err() || std::io::stdin().read_line(input).is_err() {
                break;
            }
            match input.trim() {
                "" if input.is_empty() => break,
                "" => continue,
                "quit" => break,
                "exit" => break,
                _ => match shell.handle(input).await {
                    Err(e) => eprintln!("{}", e),
                    Ok(_) => continue,
                },
            }
        }
    }

    async fn handle(&mut self, input: &str) -> Result<(), Box<dyn std::error::Error>> {
        match Query::try_parse_from(std::iter::once("> ").chain(input.split_whitespace()))? {
            Query::Set { seat, range } => {
                self.0.set_range_str(seat, &range.join(" ")).await?;
                Ok(println!("{}", self.0.notation(seat)))
            }
            Query::Show { seat } => {
                let rows = self
                    .0
                    .grid(seat)
                    .cells()
                    .map(|(bucket, percent)| paint(bucket, percent))
                    .collect::<Vec<_>>()
                    .chunks(RANKS)
                    .map(|row| row.join(" "))
                    .collect::<Vec<_>>()
                    .join("\n");
                Ok(println!("{}", rows))
            }
            Query::Cell {
                seat,
                row,
                col,
                percent,
            } => Ok(self.0.edit(seat, row, col, percent).await?),
            Query::Clear { seat } => Ok(self.0.clear(seat).await?),
            Query::Notation { seat } => Ok(println!("{}", self.0.engine_notation(seat).await?)),
            Query::Combos { seat } => Ok(println!("{:.1}", self.0.grid(seat).combos())),
            Query::Raw { seat } => {
                let raw = self.0.raw(seat).await?;
                let held = raw.iter().filter(|w| **w > 0.0).count();
                Ok(println!("{} of {} combos held, {:.2} weighted", held, raw.len(), raw.iter().sum::<f32>()))
            }
            Query::Config => Ok(println!("{}", serde_json::to_string_pretty(self.0.config())?)),
            Query::Save => {
                self.0.snapshots_mut().promote_to_temporary();
                self.0.snapshots_mut().commit_saved();
                Ok(println!("saved"))
            }
        }
    }
}

#[tokio::main]
async fn main() {
    rangeview::log();
    Shell::run().await;
}
