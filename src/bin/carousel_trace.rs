use carousel_rs::api::{CarouselConfig, CarouselEngine, EngineSnapshot, MountDescriptor};
use carousel_rs::interaction::InputEvent;
use carousel_rs::render::NullRenderer;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const USAGE: &str = "usage: carousel_trace --input <scenario.json> --output <capture.json>";

#[derive(Debug)]
struct CliArgs {
    input: PathBuf,
    output: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ScenarioFile {
    trace_name: String,
    slide_count: usize,
    #[serde(default)]
    options: Option<CarouselConfig>,
    steps: Vec<ScenarioStep>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
enum ScenarioStep {
    Input { event: InputEvent },
    Previous,
    Next,
    GoTo { index: usize },
    StartAutoplay,
    StopAutoplay,
    ToggleAutoplay,
    AdvanceMs { ms: u64 },
    Teardown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CaptureFile {
    trace_name: String,
    initial: EngineSnapshot,
    steps: Vec<CaptureStep>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CaptureStep {
    step: ScenarioStep,
    accepted: bool,
    snapshot: EngineSnapshot,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let _ = carousel_rs::telemetry::init_default_tracing();
    let args = parse_args()?;
    let raw = fs::read_to_string(&args.input)
        .map_err(|err| format!("failed to read `{}`: {err}", args.input.display()))?;
    let scenario: ScenarioFile =
        serde_json::from_str(&raw).map_err(|err| format!("invalid json: {err}"))?;
    let capture = replay(scenario)?;
    write_json(&args.output, &capture)
}

fn replay(scenario: ScenarioFile) -> Result<CaptureFile, String> {
    let config = scenario.options.unwrap_or_default();
    let mount = MountDescriptor::standard(scenario.slide_count);
    let mut engine = CarouselEngine::new(NullRenderer::default(), mount, config)
        .map_err(|err| format!("failed to mount carousel: {err}"))?;

    let initial = engine.snapshot();
    let mut steps = Vec::with_capacity(scenario.steps.len());
    for step in scenario.steps {
        let accepted = apply_step(&mut engine, &step)
            .map_err(|err| format!("step {step:?} failed: {err}"))?;
        steps.push(CaptureStep {
            step,
            accepted,
            snapshot: engine.snapshot(),
        });
    }

    Ok(CaptureFile {
        trace_name: scenario.trace_name,
        initial,
        steps,
    })
}

fn apply_step(
    engine: &mut CarouselEngine<NullRenderer>,
    step: &ScenarioStep,
) -> carousel_rs::CarouselResult<bool> {
    match step {
        ScenarioStep::Input { event } => engine.handle_input(*event),
        ScenarioStep::Previous => engine.go_to_previous(),
        ScenarioStep::Next => engine.go_to_next(),
        ScenarioStep::GoTo { index } => engine.go_to_slide(*index),
        ScenarioStep::StartAutoplay => engine.start_autoplay().map(|()| true),
        ScenarioStep::StopAutoplay => engine.stop_autoplay().map(|()| true),
        ScenarioStep::ToggleAutoplay => engine.toggle_autoplay().map(|()| true),
        ScenarioStep::AdvanceMs { ms } => engine
            .advance_time(Duration::from_millis(*ms))
            .map(|ticks| ticks > 0),
        ScenarioStep::Teardown => Ok(engine.teardown().torn_down),
    }
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|err| format!("failed to serialize output: {err}"))?;
    fs::write(path, json).map_err(|err| format!("failed to write `{}`: {err}", path.display()))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut input = None::<PathBuf>;
    let mut output = None::<PathBuf>;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            other => return Err(format!("unknown argument `{other}`\n{USAGE}")),
        }
    }

    Ok(CliArgs {
        input: input.ok_or_else(|| format!("missing --input\n{USAGE}"))?,
        output: output.ok_or_else(|| format!("missing --output\n{USAGE}"))?,
    })
}
