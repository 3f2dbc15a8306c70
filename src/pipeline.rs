use crate::classify;
use crate::error::ExtractError;
use crate::fetcher::PageFetcher;
use crate::output::{ArtifactKind, OutputRouter};
use crate::probe::LivenessProbe;
use crate::results::{ExtractionResult, ExtractionTarget, PageSnapshot};
use crate::tokenize::Tokenizer;
use url::Url;

/// States of a single extraction run.
///
/// `Unreachable`, `Done` and `ErrorTerminal` are terminal; the rest
/// are passed through in fixed order with no retries and no fan-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    CheckingLiveness,
    Unreachable,
    Navigating,
    Extracting,
    Routing,
    Done,
    ErrorTerminal,
}

impl PipelineState {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            PipelineState::Unreachable | PipelineState::Done | PipelineState::ErrorTerminal
        )
    }

    /// Whether the process should exit zero from this state. An
    /// endpoint that simply is not live is a successful (if empty)
    /// run; a collaborator failure is not.
    pub fn is_success(self) -> bool {
        matches!(self, PipelineState::Unreachable | PipelineState::Done)
    }
}

fn advance(from: PipelineState, to: PipelineState) -> PipelineState {
    ::log::debug!("Pipeline {:?} -> {:?}", from, to);
    to
}

/// Runs one extraction from liveness probe to routed output and
/// returns the terminal state.
///
/// The fetcher is consumed; its browser session is released on every
/// exit path once navigation has been attempted. Collaborator
/// failures surface as a one-line diagnostic through the router and
/// the `ErrorTerminal` state; only sink failures return `Err`.
pub async fn run<P, F>(
    probe: &P,
    fetcher: F,
    router: &mut OutputRouter,
    target: &ExtractionTarget,
) -> Result<PipelineState, ExtractError>
where
    P: LivenessProbe,
    F: PageFetcher,
{
    let url = &target.requested_url;
    let mut state = advance(PipelineState::Idle, PipelineState::CheckingLiveness);

    if !probe.check_live(url).await {
        ::log::info!("Endpoint {} failed the liveness probe", url);
        router.notice(&format!("Endpoint {} is not live.", url))?;
        return Ok(advance(state, PipelineState::Unreachable));
    }

    state = advance(state, PipelineState::Navigating);
    let snapshot = match capture_snapshot(fetcher, url).await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            ::log::error!("Run for {} failed: {}", url, e);
            router.diagnostic(&format!("Error while extracting {}: {}", url, e))?;
            return Ok(advance(state, PipelineState::ErrorTerminal));
        }
    };

    state = advance(state, PipelineState::Extracting);
    let result = extract(&snapshot)?;

    state = advance(state, PipelineState::Routing);
    router.emit(ArtifactKind::Scripts, &result.scripts)?;
    router.emit(ArtifactKind::Words, &result.words)?;
    router.emit(ArtifactKind::Urls, &result.urls)?;

    Ok(advance(state, PipelineState::Done))
}

/// Navigates and captures the page snapshot, releasing the browser
/// session whether or not the capture succeeded.
async fn capture_snapshot<F: PageFetcher>(
    mut fetcher: F,
    url: &str,
) -> Result<PageSnapshot, ExtractError> {
    let captured = async {
        let final_url = fetcher.navigate(url).await?;
        ::log::info!("Navigation resolved {} to {}", url, final_url);
        let title = fetcher.title().await?;
        let body_text = fetcher.body_text().await?;
        let anchor_hrefs = fetcher.anchor_hrefs().await?;
        let script_srcs = fetcher.script_srcs().await?;
        Ok(PageSnapshot::new(
            final_url,
            title,
            body_text,
            anchor_hrefs,
            script_srcs,
        ))
    }
    .await;

    fetcher.close().await;
    captured
}

/// Derives the three artifact sets from a snapshot. Pure: a fixed
/// snapshot always yields byte-identical results.
pub fn extract(snapshot: &PageSnapshot) -> Result<ExtractionResult, ExtractError> {
    let tokenizer = Tokenizer::new()?;
    let words = tokenizer.word_set(&snapshot.title, &snapshot.body_text);

    let final_url = Url::parse(&snapshot.final_url).map_err(|e| ExtractError::InvalidUrl {
        url: snapshot.final_url.clone(),
        source: e,
    })?;
    let urls = classify::scope_urls(&final_url, &snapshot.anchor_hrefs);
    let scripts = classify::script_urls(&final_url, &snapshot.script_srcs);

    Ok(ExtractionResult::new(words, urls, scripts))
}
