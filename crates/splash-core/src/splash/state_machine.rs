//! Splash state machine.
//!
//! Defines a pure state transition function for the splash screen flow.

/// Splash flow state.
///
/// 开屏流程状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SplashState {
    /// Branded logo reveal.
    ///
    /// 品牌标志页。
    Logo,
    /// Searching animation while the location lookup runs concurrently.
    ///
    /// 定位查找页。
    FindingLocation,
    /// Institutional logo with the resolved location caption.
    ///
    /// 机构标志页。
    InstitutionLogo,
    /// Welcome banner.
    ///
    /// 欢迎页。
    Welcome,
    /// Static user identity card.
    ///
    /// 用户信息页。
    UserInfo,
    /// Sequence finished, control handed to the main application.
    ///
    /// 流程结束。
    Done,
}

impl SplashState {
    /// True once the sequence has handed off and no screen remains.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SplashState::Done)
    }
}

/// Events that drive the splash flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplashEvent {
    /// The dwell timer of the active stage elapsed.
    StageTimedOut,
}

/// Side-effects produced by state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplashAction {
    /// Kick off the concurrent location resolution.
    ResolveLocation,
    /// Hand control to the main application.
    ProceedToMain,
}

/// Pure splash state machine.
///
/// 纯状态机：不包含副作用。
///
/// Transitions are strictly forward; unknown (state, event) pairs are
/// absorbed without changing state or emitting actions.
pub struct SplashStateMachine;

impl SplashStateMachine {
    pub fn transition(state: SplashState, event: SplashEvent) -> (SplashState, Vec<SplashAction>) {
        match (state, event) {
            (SplashState::Logo, SplashEvent::StageTimedOut) => (
                SplashState::FindingLocation,
                vec![SplashAction::ResolveLocation],
            ),
            (SplashState::FindingLocation, SplashEvent::StageTimedOut) => {
                // The lookup need not have completed; the label simply
                // defaults to unknown on the next screen.
                (SplashState::InstitutionLogo, Vec::new())
            }
            (SplashState::InstitutionLogo, SplashEvent::StageTimedOut) => {
                (SplashState::Welcome, Vec::new())
            }
            (SplashState::Welcome, SplashEvent::StageTimedOut) => {
                (SplashState::UserInfo, Vec::new())
            }
            (SplashState::UserInfo, SplashEvent::StageTimedOut) => {
                (SplashState::Done, vec![SplashAction::ProceedToMain])
            }
            (state, _event) => (state, Vec::new()),
        }
    }
}
