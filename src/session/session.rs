use super::config::SessionConfig;
use super::stats::{Controls, SessionStats};
use crate::recognizer::{RecognitionEvent, SpeechRecognizer};
use crate::subtitle::SubtitleDocument;
use crate::transcript::{Segment, Transcript};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

/// Start/stop instants for one recording attempt
///
/// The wall clock feeds stats and exports; the monotonic instant stamps
/// segment offsets so they can never go backwards.
#[derive(Debug, Clone, Copy)]
struct SessionTimes {
    started_wall: DateTime<Utc>,
    started_instant: Instant,
    stopped_wall: Option<DateTime<Utc>>,
}

impl SessionTimes {
    fn now() -> Self {
        Self {
            started_wall: Utc::now(),
            started_instant: Instant::now(),
            stopped_wall: None,
        }
    }
}

/// A caption session that drives the recognition service and accumulates a
/// timestamped transcript
///
/// State machine: Idle → Recording → Idle. The download flag is sticky from
/// the first stop on, and stop via service error or stream end is equivalent
/// to an explicit stop. There is no retry logic: every failure is terminal
/// for the session, and the transcript accumulated so far is frozen, never
/// discarded.
pub struct CaptionSession {
    /// Session configuration
    config: SessionConfig,

    /// Injected recognition capability
    recognizer: Arc<Mutex<Box<dyn SpeechRecognizer>>>,

    /// Whether recognition is currently active
    is_recording: Arc<AtomicBool>,

    /// Sticky download flag, set on the first stop
    download_enabled: Arc<AtomicBool>,

    /// Timing for the current recording attempt
    times: Arc<Mutex<SessionTimes>>,

    /// Accumulated transcript (finalized segments + interim buffer)
    transcript: Arc<Mutex<Transcript>>,

    /// Last recognition error code, if any
    last_error: Arc<Mutex<Option<String>>>,

    /// Handle for the event loop task
    event_task_handle: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl CaptionSession {
    /// Create a new caption session around an injected recognizer
    pub fn new(config: SessionConfig, recognizer: Box<dyn SpeechRecognizer>) -> Self {
        info!("Creating caption session: {}", config.session_id);

        Self {
            config,
            recognizer: Arc::new(Mutex::new(recognizer)),
            is_recording: Arc::new(AtomicBool::new(false)),
            download_enabled: Arc::new(AtomicBool::new(false)),
            times: Arc::new(Mutex::new(SessionTimes::now())),
            transcript: Arc::new(Mutex::new(Transcript::new())),
            last_error: Arc::new(Mutex::new(None)),
            event_task_handle: Arc::new(Mutex::new(None)),
        }
    }

    pub fn session_id(&self) -> &str {
        &self.config.session_id
    }

    /// Start (or restart) captioning in the given language
    ///
    /// Resets the transcript and the start instant, asks the recognition
    /// service to begin, and spawns the event loop. Starting while already
    /// recording aborts the previous stream first. Service errors surface
    /// asynchronously through the session state, not from this call.
    pub async fn start(&self, language: &str) -> Result<()> {
        if self.is_recording.swap(false, Ordering::SeqCst) {
            info!("Restarting caption session: {}", self.config.session_id);
            self.halt_recognizer().await;
        }
        self.join_event_loop().await;

        // Reset session state for the new attempt
        {
            let mut transcript = self.transcript.lock().await;
            transcript.reset();
        }
        {
            let mut last_error = self.last_error.lock().await;
            *last_error = None;
        }
        {
            let mut times = self.times.lock().await;
            *times = SessionTimes::now();
        }

        // Ask the service to begin producing events
        let mut events_rx = {
            let mut recognizer = self.recognizer.lock().await;
            recognizer
                .start(language)
                .await
                .context("Failed to start recognition")?
        };

        self.is_recording.store(true, Ordering::SeqCst);
        info!(
            "Caption session recording: {} ({})",
            self.config.session_id, language
        );

        let transcript = Arc::clone(&self.transcript);
        let times = Arc::clone(&self.times);
        let is_recording = Arc::clone(&self.is_recording);
        let download_enabled = Arc::clone(&self.download_enabled);
        let last_error = Arc::clone(&self.last_error);
        let recognizer = Arc::clone(&self.recognizer);
        let session_id = self.config.session_id.clone();

        let event_task = tokio::spawn(async move {
            info!("Caption event loop started: {}", session_id);

            while let Some(event) = events_rx.recv().await {
                if !is_recording.load(Ordering::SeqCst) {
                    break;
                }

                match event {
                    RecognitionEvent::Results(batch) => {
                        let elapsed_secs = {
                            let times = times.lock().await;
                            times.started_instant.elapsed().as_secs_f64()
                        };

                        let mut transcript = transcript.lock().await;
                        transcript.apply(elapsed_secs, &batch.results, batch.result_index);
                    }

                    RecognitionEvent::Error { code } => {
                        error!("Recognition error in session {}: {}", session_id, code);
                        let mut last = last_error.lock().await;
                        *last = Some(code);
                        break;
                    }

                    RecognitionEvent::End => {
                        info!("Recognition stream ended: {}", session_id);
                        break;
                    }
                }
            }

            // Stream over: transition to Idle with the transcript frozen.
            // An explicit stop() already performed this transition.
            if is_recording.swap(false, Ordering::SeqCst) {
                download_enabled.store(true, Ordering::SeqCst);

                {
                    let mut times = times.lock().await;
                    times.stopped_wall = Some(Utc::now());
                }

                let mut recognizer = recognizer.lock().await;
                if let Err(e) = recognizer.stop().await {
                    warn!("Failed to halt recognizer: {}", e);
                }
            }

            info!("Caption event loop stopped: {}", session_id);
        });

        {
            let mut handle = self.event_task_handle.lock().await;
            *handle = Some(event_task);
        }

        Ok(())
    }

    /// Stop captioning
    ///
    /// Idempotent: calling stop when not recording only refreshes control
    /// state and never touches the finalized transcript.
    pub async fn stop(&self) -> Result<SessionStats> {
        if self.is_recording.swap(false, Ordering::SeqCst) {
            info!("Stopping caption session: {}", self.config.session_id);

            {
                let mut times = self.times.lock().await;
                times.stopped_wall = Some(Utc::now());
            }

            self.halt_recognizer().await;
            self.join_event_loop().await;
        } else {
            warn!("Caption session not recording: {}", self.config.session_id);
        }

        // The export is offered from the first stop on
        self.download_enabled.store(true, Ordering::SeqCst);

        self.get_stats().await
    }

    /// Current session statistics
    pub async fn get_stats(&self) -> Result<SessionStats> {
        let times = *self.times.lock().await;
        let end = times.stopped_wall.unwrap_or_else(Utc::now);
        let duration = end.signed_duration_since(times.started_wall);

        let segment_count = {
            let transcript = self.transcript.lock().await;
            transcript.segments().len()
        };

        let last_error = {
            let last = self.last_error.lock().await;
            last.clone()
        };

        Ok(SessionStats {
            is_recording: self.is_recording.load(Ordering::SeqCst),
            started_at: times.started_wall,
            duration_secs: duration.num_milliseconds() as f64 / 1000.0,
            segment_count,
            last_error,
        })
    }

    /// UI control flags derived from the current state
    pub fn controls(&self) -> Controls {
        let recording = self.is_recording.load(Ordering::SeqCst);

        Controls {
            start_enabled: !recording,
            stop_enabled: recording,
            download_enabled: self.download_enabled.load(Ordering::SeqCst),
        }
    }

    /// Composite live display: finalized transcript plus interim text
    pub async fn live_display(&self) -> String {
        let transcript = self.transcript.lock().await;
        transcript.live_display()
    }

    /// Snapshot of the finalized transcript segments
    pub async fn get_transcript(&self) -> Vec<Segment> {
        let transcript = self.transcript.lock().await;
        transcript.segments().to_vec()
    }

    /// Render the finalized transcript as a subtitle document
    ///
    /// Pure function of the current finalized transcript; interim text is
    /// never included.
    pub async fn export_subtitle(&self) -> SubtitleDocument {
        let transcript = self.transcript.lock().await;
        SubtitleDocument::from_segments(transcript.segments())
    }

    async fn halt_recognizer(&self) {
        let mut recognizer = self.recognizer.lock().await;
        if let Err(e) = recognizer.stop().await {
            warn!("Failed to halt recognizer: {}", e);
        }
    }

    async fn join_event_loop(&self) {
        let handle = {
            let mut handle = self.event_task_handle.lock().await;
            handle.take()
        };

        if let Some(task) = handle {
            if let Err(e) = task.await {
                error!("Caption event loop panicked: {}", e);
            }
        }
    }
}
