//! Scripted "AI processing" pipeline: a fixed chain of timed stages.
//!
//! Nothing is computed. Each stage lasts `stage_secs`; the stage shown at time
//! `now` is `floor((now - started_at) / stage_secs)` into [`PROCESSING_STAGES`],
//! and anything past the end is [`Stage::Complete`]. There is no cancellation
//! and no failure path.

const BANNER_START: &str =
    "==================== One-Button Miracle Demo Start ====================";
const BANNER_END: &str =
    "=====================================================================";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    SelectingFiles,
    Uploading,
    Processing,
    Extracting,
    Generating,
    Complete,
}

/// Static copy shown while a processing stage is running.
pub struct StageInfo {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub log: &'static str,
}

/// The timed stages, in order.
pub const PROCESSING_STAGES: [Stage; 4] = [
    Stage::Uploading,
    Stage::Processing,
    Stage::Extracting,
    Stage::Generating,
];

impl Stage {
    pub fn info(self) -> Option<StageInfo> {
        let info = match self {
            Stage::Uploading => StageInfo {
                icon: "☁",
                title: "서류 업로드 중...",
                description: "파일을 안전하게 서버로 전송하고 있습니다.",
                log: "[DEMO LOG] Stage 1: Upload Started.",
            },
            Stage::Processing => StageInfo {
                icon: "🔍",
                title: "AI 텍스트 변환 중...",
                description: "이미지와 문서를 텍스트로 변환하고 있습니다.",
                log: "[DEMO LOG] Stage 2: AI Text Conversion. Confidence: 95%.",
            },
            Stage::Extracting => StageInfo {
                icon: "✍",
                title: "핵심 정보 분류 및 추출 중...",
                description: "AI가 서류를 분석하여 핵심 데이터를 추출합니다.",
                log: "[DEMO LOG] Stage 3: Classification & Extraction. Extracted: [채무자: 홍길동, 계좌: 123-456-789]",
            },
            Stage::Generating => StageInfo {
                icon: "📄",
                title: "문서 초안 생성 중...",
                description: "추출된 정보로 최종 문서를 자동 생성합니다.",
                log: "[DEMO LOG] Stage 4: Draft Generation.",
            },
            Stage::SelectingFiles | Stage::Complete => return None,
        };
        Some(info)
    }

    /// Whether the accuracy badge is shown for this stage.
    pub fn shows_accuracy_badge(self) -> bool {
        self == Stage::Processing
    }

    pub fn is_running(self) -> bool {
        !matches!(self, Stage::SelectingFiles | Stage::Complete)
    }
}

#[derive(Debug)]
pub struct Pipeline {
    pub stage: Stage,
    started_at: Option<f64>,
    stage_secs: f64,
    /// Index of the last stage entered and logged (`PROCESSING_STAGES.len()` = complete).
    entered: usize,
}

impl Pipeline {
    pub fn new(stage_secs: f64) -> Self {
        Self {
            stage: Stage::SelectingFiles,
            started_at: None,
            stage_secs,
            entered: 0,
        }
    }

    /// Begin processing. Ignored unless still selecting files and `ready`
    /// (exactly the required number of files chosen).
    pub fn start(&mut self, now: f64, ready: bool) -> bool {
        if self.stage != Stage::SelectingFiles || !ready {
            return false;
        }
        log::info!("{BANNER_START}");
        self.started_at = Some(now);
        self.entered = 0;
        self.enter(0);
        true
    }

    /// Move to whichever stage `now` falls in, logging every stage passed on
    /// the way. Returns the stage if it changed.
    pub fn tick(&mut self, now: f64) -> Option<Stage> {
        let started_at = self.started_at?;
        if self.stage == Stage::Complete {
            return None;
        }
        let elapsed = (now - started_at).max(0.0);
        let target = ((elapsed / self.stage_secs).floor() as usize).min(PROCESSING_STAGES.len());
        if target <= self.entered {
            return None;
        }
        for index in self.entered + 1..=target {
            self.enter(index);
        }
        Some(self.stage)
    }

    /// Seconds until the next stage transition while running.
    pub fn until_next(&self, now: f64) -> Option<f64> {
        let started_at = self.started_at?;
        if !self.stage.is_running() {
            return None;
        }
        let next_at = started_at + (self.entered + 1) as f64 * self.stage_secs;
        Some((next_at - now).max(0.0))
    }

    pub fn reset(&mut self) {
        self.stage = Stage::SelectingFiles;
        self.started_at = None;
        self.entered = 0;
    }

    fn enter(&mut self, index: usize) {
        self.entered = index;
        match PROCESSING_STAGES.get(index) {
            Some(&stage) => {
                self.stage = stage;
                if let Some(info) = stage.info() {
                    log::info!("{}", info.log);
                }
            }
            None => {
                self.stage = Stage::Complete;
                log::info!("[DEMO LOG] Complete! Mock documents are ready.");
                log::info!("{BANNER_END}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_requires_ready_selection() {
        let mut p = Pipeline::new(2.0);
        assert!(!p.start(0.0, false));
        assert_eq!(p.stage, Stage::SelectingFiles);
        assert_eq!(p.tick(100.0), None);
    }

    #[test]
    fn stages_follow_fixed_timeline() {
        let mut p = Pipeline::new(2.0);
        assert!(p.start(10.0, true));
        assert_eq!(p.stage, Stage::Uploading);
        assert_eq!(p.tick(11.9), None);
        assert_eq!(p.tick(12.0), Some(Stage::Processing));
        assert_eq!(p.tick(14.5), Some(Stage::Extracting));
        assert_eq!(p.tick(16.0), Some(Stage::Generating));
        assert_eq!(p.tick(17.0), None);
        assert_eq!(p.tick(18.0), Some(Stage::Complete));
        assert_eq!(p.tick(30.0), None);
    }

    #[test]
    fn late_tick_jumps_to_complete() {
        let mut p = Pipeline::new(2.0);
        p.start(0.0, true);
        assert_eq!(p.tick(60.0), Some(Stage::Complete));
        assert_eq!(p.until_next(60.0), None);
    }

    #[test]
    fn start_is_ignored_once_running() {
        let mut p = Pipeline::new(2.0);
        p.start(0.0, true);
        p.tick(3.0);
        assert!(!p.start(3.0, true));
        assert_eq!(p.stage, Stage::Processing);
    }

    #[test]
    fn until_next_counts_down_within_stage() {
        let mut p = Pipeline::new(2.0);
        assert_eq!(p.until_next(0.0), None);
        p.start(0.0, true);
        assert_eq!(p.until_next(0.5), Some(1.5));
        p.tick(2.0);
        assert_eq!(p.until_next(3.0), Some(1.0));
    }

    #[test]
    fn reset_returns_to_selection() {
        let mut p = Pipeline::new(2.0);
        p.start(0.0, true);
        p.tick(9.0);
        p.reset();
        assert_eq!(p.stage, Stage::SelectingFiles);
        assert!(p.start(20.0, true));
        assert_eq!(p.stage, Stage::Uploading);
    }

    #[test]
    fn only_processing_stage_shows_badge() {
        let badged: Vec<Stage> = PROCESSING_STAGES
            .into_iter()
            .filter(|s| s.shows_accuracy_badge())
            .collect();
        assert_eq!(badged, vec![Stage::Processing]);
        assert!(Stage::Complete.info().is_none());
    }
}
