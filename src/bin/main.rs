use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use dat_core::report::{scale_position, Heatmap, ScoreBand};
use dat_core::session::{Attempt, Countdown, Phase};
use dat_core::{persistence, DatConfig, Engine, ScoringResult, ValidationOutcome};
use std::io::{self, stdin, stdout, Stdout, Write};
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;
use tracing::{error, info};

const DEFAULT_CONFIG_PATH: &str = "dat.toml";
const ORANGE: Color = Color::Rgb { r: 255, g: 165, b: 0 };

enum Screen {
    Input,
    Result(ScoringResult),
}

fn load_config() -> dat_core::Result<DatConfig> {
    match std::env::args().nth(1) {
        Some(path) => DatConfig::from_file(path),
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => DatConfig::from_file(DEFAULT_CONFIG_PATH),
        None => Ok(DatConfig::default()),
    }
}

fn main() -> ExitCode {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("[ERROR] {}", e);
            return ExitCode::FAILURE;
        }
    };

    let level = match config.log_level() {
        Ok(level) => level,
        Err(e) => {
            eprintln!("[ERROR] {}", e);
            return ExitCode::FAILURE;
        }
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .init();

    let engine = match persistence::load_engine(&config) {
        Ok(engine) => engine,
        Err(e) => {
            error!(error = %e, "asset load failed");
            eprintln!("[ERROR] Could not load assets: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(&engine, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[ERROR] Terminal I/O failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(engine: &Engine, config: &DatConfig) -> io::Result<()> {
    let mut out = stdout();
    let mut attempt = Attempt::new(config.session.slots);
    let mut countdown = Countdown::new(&config.session);
    let mut screen = Screen::Input;
    let mut status = String::new();

    countdown.start();
    let mut last_tick = Instant::now();

    loop {
        match &screen {
            Screen::Input => print_input(&mut out, &attempt, engine, &countdown, &status)?,
            Screen::Result(result) => print_result(&mut out, result)?,
        }
        status.clear();

        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            break;
        }
        let now = Instant::now();
        let expired = countdown.advance(now - last_tick);
        last_tick = now;

        if expired && matches!(screen, Screen::Input) {
            if attempt.can_submit(engine) {
                screen = submit(&attempt, engine, &mut status);
            } else {
                status = "Время вышло.".to_string();
            }
            continue;
        }

        let cmd = input.trim();
        if let Screen::Result(result) = &screen {
            match cmd {
                "exit" => break,
                "json" => {
                    let json = serde_json::to_string_pretty(result)
                        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
                    println!("{}\n\n[Enter]", json);
                    stdin().read_line(&mut String::new())?;
                    continue;
                }
                "reset" => {}
                _ => continue,
            }
        }

        let paused = !countdown.is_running() && !countdown.is_expired();

        match cmd {
            "exit" => break,
            "reset" => {
                attempt.reset();
                countdown.start();
                screen = Screen::Input;
            }
            "pause" => {
                if countdown.is_running() {
                    countdown.pause();
                } else {
                    countdown.resume();
                }
            }
            "" | "submit" => {
                if !paused && attempt.can_submit(engine) {
                    countdown.pause();
                    screen = submit(&attempt, engine, &mut status);
                }
            }
            _ if paused => {
                status = "Пауза. Введите 'pause', чтобы продолжить.".to_string();
            }
            s if s.starts_with(':') => {
                // ":3 слово" edits slot 3; ":3" alone clears it.
                let (index, word) = s[1..].split_once(' ').unwrap_or((&s[1..], ""));
                match index.parse::<usize>() {
                    Ok(n) if n >= 1 => {
                        if let Err(e) = attempt.edit(n - 1, word, engine) {
                            status = e.to_string();
                        }
                    }
                    _ => status = format!("Неверный номер поля: '{}'", index),
                }
            }
            s => match attempt.first_empty() {
                Some(slot) => {
                    if let Err(e) = attempt.edit(slot, s, engine) {
                        status = e.to_string();
                    }
                }
                None => status = "Все поля заполнены. Используйте ':N слово'.".to_string(),
            },
        }
    }
    Ok(())
}

fn submit(attempt: &Attempt, engine: &Engine, status: &mut String) -> Screen {
    match attempt.submit(engine) {
        Ok(result) => {
            info!(score = result.calibrated_score, words = ?result.words, "attempt scored");
            Screen::Result(result)
        }
        Err(e) => {
            *status = e.to_string();
            Screen::Input
        }
    }
}

fn print_input(
    out: &mut Stdout,
    attempt: &Attempt,
    engine: &Engine,
    countdown: &Countdown,
    status: &str,
) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    queue!(out, Print("DAT-RU: тест дивергентного мышления\n"))?;
    queue!(out, Print("---------------------------------------------------------------\n"))?;
    queue!(out, Print("Введите слова, максимально далекие друг от друга по смыслу.\n"))?;
    queue!(out, Print("':N слово' правит поле N, [Enter] отправляет, 'pause', 'reset', 'exit'.\n\n"))?;

    let timer_color = match countdown.phase() {
        Phase::Normal => Color::Reset,
        Phase::Warning => Color::Yellow,
        Phase::Danger | Phase::Expired => Color::Red,
    };
    let paused = if countdown.is_running() || countdown.is_expired() { "" } else { " (пауза)" };
    queue!(
        out,
        Print("Время: "),
        SetForegroundColor(timer_color),
        Print(countdown.display()),
        ResetColor,
        Print(format!("{}\n\n", paused))
    )?;

    for (i, slot) in attempt.slots().iter().enumerate() {
        let (icon, color) = match &slot.outcome {
            ValidationOutcome::Empty => ("", Color::Reset),
            ValidationOutcome::Accepted(_) => ("✓", Color::Green),
            ValidationOutcome::Duplicate(_) => ("✗", ORANGE),
            _ => ("✗", Color::Red),
        };
        queue!(
            out,
            Print(format!("{:>3}. {:<20} ", i + 1, slot.raw)),
            SetForegroundColor(color),
            Print(format!("{} {}", icon, slot.outcome.message())),
            ResetColor,
            Print("\n")
        )?;
    }

    let valid = attempt.valid_lemmas(engine).len();
    queue!(
        out,
        Print(format!("\nГодных слов: {} (нужно {})\n", valid, engine.scorer().word_count()))
    )?;
    if !status.is_empty() {
        queue!(out, SetForegroundColor(Color::Red), Print(format!("{}\n", status)), ResetColor)?;
    }
    queue!(out, Print("\n> "))?;
    out.flush()
}

fn print_result(out: &mut Stdout, result: &ScoringResult) -> io::Result<()> {
    let score = result.calibrated_score;
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    queue!(
        out,
        Print(format!("Ваш результат: {:.1}\n", score)),
        Print(format!("{}\n", ScoreBand::from_score(score).label()))
    )?;

    let marker = (scale_position(score) / 100.0 * 50.0).round() as usize;
    queue!(out, Print(format!("0 [{}|{}] 110\n\n", "-".repeat(marker), "-".repeat(50 - marker))))?;

    let heatmap = Heatmap::from_result(result);
    queue!(out, Print(format!("{:>10}", "")))?;
    for word in &heatmap.words {
        queue!(out, Print(format!("{:>10}", Heatmap::short_label(word))))?;
    }
    queue!(out, Print("\n"))?;

    for (i, word) in heatmap.words.iter().enumerate() {
        queue!(out, Print(format!("{:>10}", Heatmap::short_label(word))))?;
        for j in 0..heatmap.words.len() {
            if i == j {
                queue!(out, Print(format!("{:>10}", "—")))?;
                continue;
            }
            let (r, g, b) = heatmap.color(i, j);
            let text = if heatmap.dark_text(i, j) { Color::Black } else { Color::White };
            queue!(
                out,
                Print("  "),
                SetBackgroundColor(Color::Rgb { r, g, b }),
                SetForegroundColor(text),
                Print(format!("{:^8.0}", heatmap.matrix[i][j] * 100.0)),
                ResetColor
            )?;
        }
        queue!(out, Print("\n"))?;
    }

    queue!(out, Print("\nСреднее ~78. Большинство людей набирают от 70 до 85.\n"))?;
    queue!(out, Print("'json' покажет результат целиком, 'reset' начнет заново, 'exit' завершит.\n\n> "))?;
    out.flush()
}
