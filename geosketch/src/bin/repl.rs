use geosketch::{GeometryEngine, MemoryEngine, Mode, SketchConfig, Sketchpad, Status};
use std::io::{self, BufRead, Write};

const USAGE: &str = "\
board commands:
  mode none|point|line|circle|select
  click x y
  clear                  - asks for confirmation
  stats | points | quit
anything else is passed to the command language (try: help)";

fn print_status(s: &Status) {
    if !s.text.is_empty() {
        println!("[{:?}] {}", s.severity, s.text);
    }
}

fn load_config(args: &[String]) -> Result<SketchConfig, String> {
    let mut cfg = SketchConfig::default();
    for a in args {
        if let Some(path) = a.strip_prefix("--config=") {
            let text = std::fs::read_to_string(path).map_err(|e| format!("{}: {}", path, e))?;
            cfg = SketchConfig::from_json_str(&text).map_err(|e| e.to_string())?;
        } else if let Some(val) = a.strip_prefix("--threshold=") {
            cfg.snap_threshold = val.parse().map_err(|_| format!("bad threshold '{}'", val))?;
        } else {
            return Err(format!("unknown argument '{}'", a));
        }
    }
    cfg.validate().map_err(|e| e.to_string())?;
    Ok(cfg)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let cfg = match load_config(&args) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("geosketch-repl: {}", e);
            std::process::exit(2);
        }
    };
    let mut pad = Sketchpad::with_config(MemoryEngine::new(), cfg);
    println!("{}", USAGE);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{}> ", pad.mode().name());
        let _ = io::stdout().flush();
        let Some(Ok(line)) = lines.next() else { break };
        let mut words = line.split_whitespace();
        match words.next() {
            Some("quit") | Some("exit") => break,
            Some("mode") => match words.next().unwrap_or("").parse::<Mode>() {
                Ok(m) => print_status(pad.set_mode(m)),
                Err(e) => println!("[Error] {}", e),
            },
            Some("click") => {
                let x = words.next().and_then(|v| v.parse::<f64>().ok());
                let y = words.next().and_then(|v| v.parse::<f64>().ok());
                match (x, y) {
                    (Some(x), Some(y)) => {
                        let _ = pad.click(x, y);
                        print_status(pad.status());
                    }
                    _ => println!("usage: click x y"),
                }
            }
            Some("clear") => {
                let token = pad.request_clear();
                print!("Clear the whole board? [y/N] ");
                let _ = io::stdout().flush();
                let answer = lines.next().and_then(|l| l.ok()).unwrap_or_default();
                if answer.trim().eq_ignore_ascii_case("y") {
                    let _ = pad.confirm_clear(token);
                    print_status(pad.status());
                } else {
                    pad.cancel_clear();
                }
            }
            Some("stats") => {
                let s = pad.stats();
                println!("points: {}  lines: {}  circles: {}", s.points, s.lines, s.circles);
            }
            Some("points") => {
                for p in pad.scene().points() {
                    let (x, y) = pad.engine().point_coords(&p.handle);
                    println!("{} ({:.3}, {:.3})", p.label, x, y);
                }
            }
            _ => {
                let _ = pad.execute(&line);
                print_status(pad.status());
            }
        }
    }
}
