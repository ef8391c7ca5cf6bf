use glyph_base::{init_stdout_logger, Rect};
use glyph_camera::{CameraConfig, FrameSource, V4l2Camera};
use glyph_image::preprocess_frame;
use glyph_infer::{DigitClassifier, InputEncoding, ModelSource, OnnxSession, MODEL_HEIGHT, MODEL_WIDTH};
use log::{error, info};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

const FRAME_WIDTH: u32 = 320;
const FRAME_HEIGHT: u32 = 240;
// Same rig geometry as digit-still: 112x224 strip, 104 px in.
const ROI: Rect = Rect::new(104, 0, 112, 224);
const CLASSIFY_DELAY: Duration = Duration::from_secs(1);

struct Args {
    model: PathBuf,
    input_name: Option<String>,
    threshold: Option<f32>,
    device: Option<String>,
}

fn usage(program: &str) {
    eprintln!(
        "Usage: {program} <model.onnx> [--input NAME] [--threshold T] [--device PATH]"
    );
}

fn parse_args(args: &[String]) -> Result<Args, String> {
    let mut model = None;
    let mut input_name = None;
    let mut threshold = None;
    let mut device = None;

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
            "--device" => {
                let value = iter.next().ok_or("--device requires a value")?;
                device = Some(value.clone());
            }
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
        device,
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
            usage(&std::env::args().next().unwrap_or_else(|| "digit-live".to_string()));
            std::process::exit(2);
        }
    };

    info!("loading model from {}", args.model.display());
    let session = match OnnxSession::load(ModelSource::File(args.model)) {
        Ok(session) => session,
        Err(e) => glyph_base::log_fatal!("failed to load model: {e}"),
    };

    // The live variant feeds the model normalized floats; the still
    // variant feeds raw bytes. Same pixels either way.
    let mut classifier = DigitClassifier::new(Box::new(session), InputEncoding::Normalized);
    if let Some(name) = args.input_name {
        classifier = classifier.with_input_name(name);
    }

    let mut config = CameraConfig::default()
        .with_width(FRAME_WIDTH)
        .with_height(FRAME_HEIGHT);
    if let Some(device) = args.device {
        config = config.with_device(device);
    }

    let mut camera = match V4l2Camera::new(config) {
        Ok(camera) => camera,
        Err(e) => glyph_base::log_fatal!("failed to open camera: {e}"),
    };

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

    info!("starting classification loop ({FRAME_WIDTH}x{FRAME_HEIGHT})");
    let mut frame_count = 0u64;

    while !stop.load(Ordering::SeqCst) {
        let frame = match camera.recv().await {
            Ok(frame) => frame,
            Err(e) => {
                error!("capture failed: {e}");
                break;
            }
        };

        if frame.shape.len() != 3 || frame.shape[2] != 3 {
            error!("expected [H, W, 3] frame, got {:?}", frame.shape);
            break;
        }

        let processed = match preprocess_frame(&frame, ROI, (MODEL_WIDTH, MODEL_HEIGHT)) {
            Ok(processed) => processed,
            Err(e) => {
                error!("preprocessing failed: {e}");
                break;
            }
        };

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
        tokio::time::sleep(CLASSIFY_DELAY).await;
    }

    info!("processed {frame_count} frames, exiting");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args_model_only() {
        let parsed = parse_args(&args(&["model.onnx"])).unwrap();
        assert_eq!(parsed.model, PathBuf::from("model.onnx"));
        assert!(parsed.device.is_none());
    }

    #[test]
    fn test_parse_args_device_override() {
        let parsed = parse_args(&args(&["model.onnx", "--device", "/dev/video2"])).unwrap();
        assert_eq!(parsed.device.as_deref(), Some("/dev/video2"));
    }

    #[test]
    fn test_parse_args_threshold() {
        let parsed = parse_args(&args(&["model.onnx", "--threshold", "0.8"])).unwrap();
        assert_eq!(parsed.threshold, Some(0.8));
    }

    #[test]
    fn test_parse_args_missing_value() {
        assert!(parse_args(&args(&["model.onnx", "--device"])).is_err());
    }

    #[test]
    fn test_roi_fits_capture_frame() {
        assert!(ROI.fits_within(FRAME_WIDTH as usize, FRAME_HEIGHT as usize));
    }
}
