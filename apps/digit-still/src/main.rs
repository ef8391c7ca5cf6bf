use glyph_base::{init_stdout_logger, Rect};
use glyph_camera::{CameraConfig, FrameSource, StillCapture};
use glyph_image::preprocess_frame;
use glyph_infer::{DigitClassifier, InputEncoding, ModelSource, OnnxSession, MODEL_HEIGHT, MODEL_WIDTH};
use log::{error, info};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

const FRAME_WIDTH: u32 = 320;
const FRAME_HEIGHT: u32 = 240;
// Crop region of the deployed camera rig: the digit card sits in a
// 112x224 strip starting 104 px from the left edge.
const ROI: Rect = Rect::new(104, 0, 112, 224);
const CAPTURE_DELAY: Duration = Duration::from_secs(1);

struct Args {
    model: PathBuf,
    input_name: Option<String>,
    threshold: Option<f32>,
    save_frames: bool,
}

fn usage(program: &str) {
    eprintln!(
        "Usage: {program} <model.onnx> [--input NAME] [--threshold T] [--save-frames]"
    );
}

fn parse_args(args: &[String]) -> Result<Args, String> {
    let mut model = None;
    let mut input_name = None;
    let mut threshold = None;
    let mut save_frames = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--input" => {
                let value = iter.next().ok_or("--input requires a value")?;
                input_name = Some(value.clone());
            }
            "--threshold" => {
                let value = iter.next().ok_or("--threshold requires a value")?;
                let parsed: f32 = value
                    .parse()
                    .map_err(|_| format!("invalid threshold '{value}'"))?;
                threshold = Some(parsed);
            }
            "--save-frames" => save_frames = true,
            other if other.starts_with("--") => {
                return Err(format!("unknown option '{other}'"));
            }
            other => {
                if model.is_some() {
                    return Err(format!("unexpected argument '{other}'"));
                }
                model = Some(PathBuf::from(other));
            }
        }
    }

    Ok(Args {
        model: model.ok_or("missing model path")?,
        input_name,
        threshold,
        save_frames,
    })
}

#[tokio::main]
async fn main() {
    init_stdout_logger();

    let raw_args: Vec<String> = std::env::args().skip(1).collect();
    let args = match parse_args(&raw_args) {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("Error: {msg}");
            usage(&std::env::args().next().unwrap_or_else(|| "digit-still".to_string()));
            std::process::exit(2);
        }
    };

    info!("loading model from {}", args.model.display());
    let session = match OnnxSession::load(ModelSource::File(args.model)) {
        Ok(session) => session,
        Err(e) => glyph_base::log_fatal!("failed to load model: {e}"),
    };

    let mut classifier = DigitClassifier::new(Box::new(session), InputEncoding::Bytes);
    if let Some(name) = args.input_name {
        classifier = classifier.with_input_name(name);
    }

    let config = CameraConfig::default()
        .with_width(FRAME_WIDTH)
        .with_height(FRAME_HEIGHT);
    let mut source = StillCapture::new(config);

    // Cooperative stop: Ctrl-C flips the flag, observed at the top of
    // each loop iteration.
    let stop = Arc::new(AtomicBool::new(false));
    {
        let stop = stop.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("interrupt received, stopping after current frame");
                stop.store(true, Ordering::SeqCst);
            }
        });
    }

    info!("starting capture loop ({FRAME_WIDTH}x{FRAME_HEIGHT}, 1 frame/s)");
    let mut frame_count = 0u64;

    while !stop.load(Ordering::SeqCst) {
        let frame = match source.recv().await {
            Ok(frame) => frame,
            Err(e) => {
                error!("capture failed: {e}");
                break;
            }
        };

        let processed = match preprocess_frame(&frame, ROI, (MODEL_WIDTH, MODEL_HEIGHT)) {
            Ok(processed) => processed,
            Err(e) => {
                error!("preprocessing failed: {e}");
                break;
            }
        };

        if args.save_frames {
            match glyph_image::encode_png(&processed) {
                Ok(png) => {
                    let path = format!("processed_frame_{frame_count}.png");
                    if let Err(e) = std::fs::write(&path, png) {
                        error!("failed to write {path}: {e}");
                    }
                }
                Err(e) => error!("failed to encode debug frame: {e}"),
            }
        }

        let scores = match classifier.classify(&processed) {
            Ok(scores) => scores,
            Err(e) => {
                error!("inference failed: {e}");
                break;
            }
        };

        match args.threshold {
            Some(threshold) if !scores.confident(threshold) => {
                info!("{scores} (below threshold {threshold})");
            }
            _ => info!("{scores}"),
        }

        frame_count += 1;
        tokio::time::sleep(CAPTURE_DELAY).await;
    }

    info!("processed {frame_count} frames, exiting");
}
