use tracing::{debug, info};

use super::academic::{AcademicProfile, AcademicUpdate};
use super::domain::{OnboardingScreen, ValidationError};
use super::navigation::Transition;
use super::registration::RegistrationUpdate;
use super::session::OnboardingSession;

/// Input the controller consumes; one per user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMessage {
    UpdateRegistration(RegistrationUpdate),
    UpdateAcademic(AcademicUpdate),
    SubmitRegistration,
    SubmitAcademic,
}

/// Receives the signals a rendering layer needs to react to controller decisions.
pub trait Presenter {
    fn show_screen(&mut self, screen: OnboardingScreen);
    fn show_validation_error(&mut self, error: &ValidationError);
}

/// Applies user actions to one onboarding session.
#[derive(Debug, Default)]
pub struct FormController {
    session: OnboardingSession,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resume(session: OnboardingSession) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &OnboardingSession {
        &self.session
    }

    pub fn into_session(self) -> OnboardingSession {
        self.session
    }

    pub fn screen(&self) -> OnboardingScreen {
        self.session.navigation.current()
    }

    /// Whether `message` would reach the session; edits only land on the screen that owns them.
    pub fn accepts(&self, message: &FormMessage) -> bool {
        match message {
            FormMessage::UpdateRegistration(_) => self.screen() == OnboardingScreen::Registration,
            FormMessage::UpdateAcademic(_) => self.screen() == OnboardingScreen::Academic,
            FormMessage::SubmitRegistration | FormMessage::SubmitAcademic => true,
        }
    }

    /// Ignored once the registration form has been accepted.
    pub fn update_registration_field(&mut self, update: RegistrationUpdate) {
        if self.screen() != OnboardingScreen::Registration {
            debug!(
                field = update.field_name(),
                "registration edit ignored after the form was accepted"
            );
            return;
        }
        debug!(field = update.field_name(), "registration field updated");
        self.session.registration.set_field(update);
    }

    /// Ignored unless the academic questionnaire is the current screen.
    pub fn update_academic_field(&mut self, update: AcademicUpdate) {
        if self.screen() != OnboardingScreen::Academic {
            debug!(
                field = update.field().label(),
                screen = self.screen().label(),
                "academic edit ignored outside the questionnaire"
            );
            return;
        }
        self.session.academic.set_field(update);
    }

    pub fn submit_registration(&mut self) -> Result<Transition, ValidationError> {
        let failed = self.session.registration.failed_rules();
        if !failed.is_empty() {
            info!(?failed, "registration rejected");
            return Err(ValidationError::registration());
        }

        let transition = self.session.navigation.advance_to(OnboardingScreen::Academic);
        if transition.advanced() {
            self.session.academic = AcademicProfile::default();
            info!(to = transition.screen().label(), "registration accepted");
        } else {
            debug!(?transition, "registration resubmitted");
        }
        Ok(transition)
    }

    pub fn submit_academic(&mut self) -> Result<Transition, ValidationError> {
        let missing = self.session.academic.missing_fields();
        if !missing.is_empty() {
            info!(?missing, "academic profile incomplete");
            return Err(ValidationError::academic());
        }

        let transition = self.session.navigation.advance_to(OnboardingScreen::Roadmap);
        if transition.advanced() {
            info!(to = transition.screen().label(), "academic profile accepted");
        } else {
            debug!(?transition, "academic profile resubmitted");
        }
        Ok(transition)
    }

    /// Applies one message and returns the screen to render next.
    pub fn handle(&mut self, message: FormMessage) -> Result<OnboardingScreen, ValidationError> {
        match message {
            FormMessage::UpdateRegistration(update) => {
                self.update_registration_field(update);
                Ok(self.screen())
            }
            FormMessage::UpdateAcademic(update) => {
                self.update_academic_field(update);
                Ok(self.screen())
            }
            FormMessage::SubmitRegistration => {
                self.submit_registration().map(|transition| transition.screen())
            }
            FormMessage::SubmitAcademic => {
                self.submit_academic().map(|transition| transition.screen())
            }
        }
    }

    /// Like [`FormController::handle`], forwarding screen changes and rejections to `presenter`.
    pub fn dispatch<P>(
        &mut self,
        message: FormMessage,
        presenter: &mut P,
    ) -> Result<OnboardingScreen, ValidationError>
    where
        P: Presenter + ?Sized,
    {
        let before = self.screen();
        let outcome = self.handle(message);
        match &outcome {
            Ok(screen) if *screen != before => presenter.show_screen(*screen),
            Ok(_) => {}
            Err(error) => presenter.show_validation_error(error),
        }
        outcome
    }
}
