use stuttz_onboarding::workflows::onboarding::{
    AcademicProfile, FormController, FormMessage, OnboardingEvent, OnboardingScreen,
    RegistrationForm, RegistrationUpdate, Transition, ValidationError,
};

fn registration(
    full_name: &str,
    email: &str,
    password: &str,
    password_confirmation: &str,
    accepted_terms: bool,
) -> RegistrationForm {
    RegistrationForm {
        full_name: full_name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        password_confirmation: password_confirmation.to_string(),
        accepted_terms,
    }
}

fn academic(level: &str, area: &str, goals: &str, time: &str) -> AcademicProfile {
    AcademicProfile {
        education_level: level.to_string(),
        interest_area: area.to_string(),
        learning_goals: goals.to_string(),
        available_time: time.to_string(),
    }
}

fn apply_events(controller: &mut FormController, events: Vec<OnboardingEvent>) {
    for event in events {
        if let Some(message) = event.into_message() {
            let _ = controller.handle(message);
        }
    }
}

#[test]
fn registration_scenarios_match_the_validity_rule() {
    assert!(registration("Ana", "ana@x.com", "abcdef", "abcdef", true).is_valid());
    assert!(!registration("Ana", "ana@x.com", "abc", "abc", true).is_valid());
    assert!(!registration("Ana", "ana@x.com", "abcdef", "abcxyz", true).is_valid());
    assert!(!registration("Ana", "ana@x.com", "abcdef", "abcdef", false).is_valid());
    assert!(!registration("", "ana@x.com", "abcdef", "abcdef", true).is_valid());
}

#[test]
fn academic_scenarios_ignore_learning_goals() {
    assert!(academic("Graduação Completa", "IA", "", "5h").is_complete());
    assert!(!academic("", "IA", "x", "5h").is_complete());
    assert!(!academic("Graduação Completa", "", "x", "5h").is_complete());
    assert!(!academic("Graduação Completa", "IA", "x", "").is_complete());
}

#[test]
fn presentation_events_drive_the_flow_to_the_roadmap() {
    let mut controller = FormController::new();

    apply_events(
        &mut controller,
        vec![
            OnboardingEvent::registration("nome", "Ana"),
            OnboardingEvent::registration("email", "ana@x.com"),
            OnboardingEvent::registration("senha", "abcdef"),
            OnboardingEvent::registration("confirmar_senha", "abcdef"),
            OnboardingEvent::registration("aceita_termos", true),
            OnboardingEvent::registration("apelido", "aninha"),
            OnboardingEvent::SubmitRegistration,
        ],
    );
    assert_eq!(controller.screen(), OnboardingScreen::Academic);

    apply_events(
        &mut controller,
        vec![
            OnboardingEvent::academic("nivel_escolaridade", "Graduação Completa"),
            OnboardingEvent::academic("area_interesse", "Ciência de Dados"),
            OnboardingEvent::academic("tempo_disponivel", "Entre 10 e 20 horas por semana"),
            OnboardingEvent::SubmitAcademic,
        ],
    );

    let session = controller.into_session();
    assert_eq!(session.screen(), OnboardingScreen::Roadmap);
    assert_eq!(
        session.navigation.history(),
        &OnboardingScreen::ordered()[..]
    );
    let roadmap = session.roadmap_request().expect("roadmap ready");
    assert_eq!(roadmap.education_level, "Graduação Completa");
}

#[test]
fn repeated_valid_registration_submit_is_a_no_op_advance() {
    let mut controller = FormController::new();
    for update in [
        RegistrationUpdate::FullName("Ana".to_string()),
        RegistrationUpdate::Email("ana@x.com".to_string()),
        RegistrationUpdate::Password("abcdef".to_string()),
        RegistrationUpdate::PasswordConfirmation("abcdef".to_string()),
        RegistrationUpdate::AcceptedTerms(true),
    ] {
        controller.update_registration_field(update);
    }

    let first = controller.submit_registration().expect("valid");
    let second = controller.submit_registration().expect("still valid");

    assert!(first.advanced());
    assert!(matches!(second, Transition::AlreadyReached { .. }));
    assert_eq!(controller.session().navigation.history().len(), 2);
}

#[test]
fn invalid_submits_never_advance() {
    let mut controller = FormController::new();
    let outcomes: Vec<_> = (0..3)
        .map(|_| controller.handle(FormMessage::SubmitRegistration))
        .collect();

    assert!(outcomes
        .iter()
        .all(|outcome| outcome == &Err(ValidationError::registration())));
    assert_eq!(controller.screen(), OnboardingScreen::Registration);
}
