use clap::Args;
use std::path::PathBuf;
use stuttz_onboarding::error::AppError;
use stuttz_onboarding::workflows::onboarding::catalog::{
    EDUCATION_LEVELS, INTEREST_AREAS, STUDY_TIMES,
};
use stuttz_onboarding::workflows::onboarding::{
    FormController, FormMessage, OnboardingEvent, OnboardingScreen, OnboardingSession, Presenter,
    SessionId, SessionView, ValidationError,
};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Learner name used for the sample registration
    #[arg(long)]
    pub(crate) name: Option<String>,
    /// Interest area to pick on the academic questionnaire
    #[arg(long)]
    pub(crate) interest_area: Option<String>,
    /// Skip the deliberately incomplete submits on both forms
    #[arg(long)]
    pub(crate) skip_rejections: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ReplayArgs {
    /// JSON file holding an array of onboarding events
    pub(crate) script: PathBuf,
    /// Print the final session as JSON instead of a text summary
    #[arg(long)]
    pub(crate) json: bool,
}

/// Presenter that records what a screen-based UI would have shown.
#[derive(Debug, Default)]
pub(crate) struct TranscriptPresenter {
    pub(crate) lines: Vec<String>,
}

impl Presenter for TranscriptPresenter {
    fn show_screen(&mut self, screen: OnboardingScreen) {
        self.lines.push(format!("-> {}", screen.label()));
    }

    fn show_validation_error(&mut self, error: &ValidationError) {
        self.lines
            .push(format!("!! {} ({})", error.message, error.screen.label()));
    }
}

pub(crate) fn replay_events(
    events: Vec<OnboardingEvent>,
) -> (OnboardingSession, TranscriptPresenter) {
    let mut controller = FormController::new();
    let mut presenter = TranscriptPresenter::default();

    for event in events {
        match event.into_message() {
            Some(message) if !controller.accepts(&message) => {
                presenter.lines.push(ignored_edit_note(&message, controller.screen()));
            }
            Some(message) => {
                let _ = controller.dispatch(message, &mut presenter);
            }
            None => presenter.lines.push("   (edit ignored: unknown field)".to_string()),
        }
    }

    (controller.into_session(), presenter)
}

fn ignored_edit_note(message: &FormMessage, screen: OnboardingScreen) -> String {
    let reason = match (message, screen) {
        (FormMessage::UpdateAcademic(_), OnboardingScreen::Registration) => {
            "registration not accepted"
        }
        (FormMessage::UpdateAcademic(_), _) => "academic profile already accepted",
        _ => "registration already accepted",
    };
    format!("   (edit ignored: {reason})")
}

pub(crate) fn demo_events(args: &DemoArgs) -> Vec<OnboardingEvent> {
    let name = args.name.clone().unwrap_or_else(|| "Ana Souza".to_string());
    let interest_area = args
        .interest_area
        .clone()
        .unwrap_or_else(|| INTEREST_AREAS[3].to_string());

    let mut events = vec![
        OnboardingEvent::registration("full_name", name),
        OnboardingEvent::registration("email", "ana.souza@example.com"),
        OnboardingEvent::registration("password", "trilha123"),
        OnboardingEvent::registration("password_confirmation", "trilha12"),
        OnboardingEvent::registration("accepted_terms", true),
    ];

    if !args.skip_rejections {
        events.push(OnboardingEvent::SubmitRegistration);
    }

    events.extend([
        OnboardingEvent::registration("password_confirmation", "trilha123"),
        OnboardingEvent::SubmitRegistration,
        OnboardingEvent::academic("education_level", EDUCATION_LEVELS[3]),
        OnboardingEvent::academic("interest_area", interest_area),
    ]);

    if !args.skip_rejections {
        events.push(OnboardingEvent::SubmitAcademic);
    }

    events.extend([
        OnboardingEvent::academic(
            "learning_goals",
            "Construir um assistente com modelos de linguagem",
        ),
        OnboardingEvent::academic("available_time", STUDY_TIMES[1]),
        OnboardingEvent::SubmitAcademic,
    ]);

    events
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    println!("Stuttz onboarding demo");
    let (session, presenter) = replay_events(demo_events(&args));
    render_transcript(&presenter);
    render_session(&session);
    Ok(())
}

pub(crate) fn run_replay(args: ReplayArgs) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&args.script)?;
    let events: Vec<OnboardingEvent> = serde_json::from_str(&raw)?;
    let (session, presenter) = replay_events(events);

    if args.json {
        let view = SessionView::from_session(SessionId("replay".to_string()), &session);
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        render_transcript(&presenter);
        render_session(&session);
    }

    Ok(())
}

pub(crate) fn run_options() -> Result<(), AppError> {
    println!("Education levels");
    for level in EDUCATION_LEVELS {
        println!("- {level}");
    }
    println!("\nInterest areas");
    for area in INTEREST_AREAS {
        println!("- {area}");
    }
    println!("\nAvailable study time");
    for time in STUDY_TIMES {
        println!("- {time}");
    }
    Ok(())
}

fn render_transcript(presenter: &TranscriptPresenter) {
    println!("\nTranscript");
    for line in &presenter.lines {
        println!("{line}");
    }
}

fn render_session(session: &OnboardingSession) {
    println!("\nFinal screen: {}", session.screen().label());

    match session.roadmap_request() {
        Some(roadmap) => {
            println!("Roadmap request");
            println!("- Learner: {} <{}>", roadmap.full_name, roadmap.email);
            println!("- Education level: {}", roadmap.education_level);
            println!("- Interest area: {}", roadmap.interest_area);
            println!("- Available time: {}", roadmap.available_time);
            if let Some(goals) = roadmap.learning_goals {
                println!("- Goals: {goals}");
            }
        }
        None => {
            let rules = session.registration.failed_rules();
            if !rules.is_empty() {
                println!("Registration issues");
                for rule in rules {
                    println!("- {}", rule.label());
                }
            }
            if session.navigation.has_reached(OnboardingScreen::Academic) {
                let missing = session.academic.missing_fields();
                if !missing.is_empty() {
                    println!("Missing academic answers");
                    for field in missing {
                        println!("- {}", field.label());
                    }
                }
            }
        }
    }
}
