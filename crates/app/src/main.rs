use std::fmt;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};

use catalog::{InMemoryCatalog, SkillCatalog};
use quiz_core::model::{QuizSettings, SkillId};
use quiz_core::session::EventOutcome;
use services::{Clock, QuizResultView, QuizService, QuizSessionHandle, QuizSnapshot};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidSeconds { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidSeconds { raw } => write!(f, "invalid --seconds value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct Args {
    skill_id: SkillId,
    seconds_per_question: Option<u32>,
    list_skills: bool,
    search: Option<String>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--skill-id <slug>] [--seconds <n>]");
    eprintln!("  cargo run -p app -- --skills [--search <query>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --skill-id public-speaking");
    eprintln!("  --seconds 30");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_SKILL_ID");
    eprintln!();
    eprintln!("In a quiz: type an option number to answer, press Enter to");
    eprintln!("continue after a reveal, `q` to quit.");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut skill_id = std::env::var("QUIZ_SKILL_ID")
            .ok()
            .map_or_else(|| SkillId::new("public-speaking"), SkillId::new);
        let mut seconds_per_question = None;
        let mut list_skills = false;
        let mut search = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--skill-id" => {
                    let value = require_value(args, "--skill-id")?;
                    skill_id = SkillId::new(value);
                }
                "--seconds" => {
                    let value = require_value(args, "--seconds")?;
                    let parsed: u32 = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidSeconds { raw: value.clone() })?;
                    seconds_per_question = Some(parsed);
                }
                "--skills" => list_skills = true,
                "--search" => search = Some(require_value(args, "--search")?),
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            skill_id,
            seconds_per_question,
            list_skills,
            search,
        })
    }
}

fn list_skills(catalog: &InMemoryCatalog, query: Option<&str>) {
    let skills = match query {
        Some(query) => catalog.search(query),
        None => catalog.skills(),
    };
    if skills.is_empty() {
        println!("No skills found");
        return;
    }
    for skill in skills {
        println!(
            "{} {:<24} {}  ({})",
            skill.icon(),
            skill.name(),
            skill.description(),
            skill.id()
        );
    }
}

fn render_question(snapshot: &QuizSnapshot) {
    let Some(question) = &snapshot.question else {
        return;
    };
    println!();
    println!(
        "{}  [{}s]",
        snapshot.progress.label(),
        snapshot.time_remaining
    );
    println!("{}", question.prompt());
    for (i, option) in question.options().iter().enumerate() {
        println!("  {}. {option}", i + 1);
    }
    println!("> answer 1-{}:", question.option_count());
}

fn render_reveal(snapshot: &QuizSnapshot) {
    let Some(question) = &snapshot.question else {
        return;
    };
    match snapshot.selected_answer {
        Some(index) if question.is_correct(index) => println!("Correct!"),
        Some(_) => println!(
            "Not quite. The correct answer was: {}",
            question.options()[question.correct_answer()]
        ),
        None => println!(
            "Time's up! The correct answer was: {}",
            question.options()[question.correct_answer()]
        ),
    }
    println!("Explanation: {}", question.explanation());
    println!("Score: {}/{}", snapshot.score, snapshot.total);
    println!("(press Enter to continue)");
}

fn render_results(snapshot: &QuizSnapshot) {
    let Some(summary) = &snapshot.summary else {
        return;
    };
    let view = QuizResultView::new(
        snapshot.skill_name.clone(),
        summary,
        snapshot.earned_badges.clone(),
    );

    println!();
    println!("Quiz Complete! {}", view.skill_name);
    println!("{}%  ({})", view.percentage, view.score_line());
    println!("{}", view.band.message());
    if !view.badges.is_empty() {
        println!();
        println!("Badges earned:");
        for badge in &view.badges {
            println!(
                "  {} {} [{}] - {}",
                badge.icon(),
                badge.name(),
                badge.tier().as_slug(),
                badge.description()
            );
        }
    }
}

fn render(snapshot: &QuizSnapshot) {
    match snapshot.outcome {
        None | Some(EventOutcome::Advanced) => render_question(snapshot),
        Some(EventOutcome::Ticked { remaining }) => {
            // Only nudge occasionally so the countdown doesn't flood the terminal.
            if remaining <= 5 || remaining % 10 == 0 {
                println!("  {remaining}s left");
            }
        }
        Some(EventOutcome::Revealed { .. } | EventOutcome::TimeExpired) => render_reveal(snapshot),
        Some(EventOutcome::Completed) => render_results(snapshot),
        Some(EventOutcome::Ignored) => {}
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let catalog = Arc::new(InMemoryCatalog::from_embedded()?);
    log::debug!("catalog loaded: {} skills", catalog.skills().len());

    if args.list_skills {
        list_skills(&catalog, args.search.as_deref());
        return Ok(());
    }

    let mut service = QuizService::new(Clock::system(), catalog.clone(), catalog.clone());
    if let Some(seconds) = args.seconds_per_question {
        service = service.with_settings(QuizSettings::new(seconds)?);
    }

    // Display name comes from the skill catalog; an unknown skill keeps its
    // slug as the name while the session falls back to the default questions.
    let skill_name = catalog
        .skill(&args.skill_id)
        .map_or_else(|| args.skill_id.to_string(), |skill| skill.name().to_string());

    let session = service.start(args.skill_id, skill_name.clone())?;
    let handle = QuizSessionHandle::spawn(service, session);

    println!("{skill_name} Quiz");

    let mut state = handle.subscribe();

    // Reading lines is not cancellation safe inside select!, so stdin gets
    // its own task and a channel.
    let (input_tx, mut input_rx) = tokio::sync::mpsc::channel::<String>(4);
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            if input_tx.send(line).await.is_err() {
                break;
            }
        }
    });

    render_question(&state.borrow_and_update().clone());

    loop {
        tokio::select! {
            changed = state.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = state.borrow_and_update().clone();
                render(&snapshot);
                if snapshot.complete {
                    break;
                }
            }
            line = input_rx.recv() => {
                let Some(line) = line else { break };
                let input = line.trim();
                let snapshot = handle.snapshot();
                if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit") {
                    break;
                } else if input.is_empty() {
                    handle.advance().await;
                } else if let Ok(number) = input.parse::<usize>() {
                    let options = snapshot
                        .question
                        .as_ref()
                        .map_or(0, quiz_core::model::Question::option_count);
                    if number >= 1 && number <= options {
                        handle.select_answer(number - 1).await;
                    } else {
                        println!("pick a number between 1 and {options}");
                    }
                } else {
                    println!("type an option number, Enter to continue, or `q` to quit");
                }
            }
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    env_logger::init();
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
