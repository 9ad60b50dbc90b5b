//! Drives the onboarding wizard the way the key handler does: list moves,
//! focus switches, and Enter/Esc, from the first step through completion.

use skore::ui::setup::{IndustryFocus, ProfileWizard, WizardResult, WizardStep};

/// Fill step 1 by walking both lists, like Down then Tab then Down.
fn pick_industry(wizard: &mut ProfileWizard) {
    wizard.select(true);
    wizard.cycle_focus();
    assert_eq!(wizard.industry_focus, IndustryFocus::SubIndustry);
    wizard.select(true);
}

#[test]
fn test_step_one_holds_until_sub_industry_is_picked() {
    let mut wizard = ProfileWizard::new();
    assert_eq!(wizard.step(), WizardStep::Industry);

    // Industry alone is not enough.
    wizard.select(true);
    assert!(!wizard.profile.industry.is_empty());
    assert!(!wizard.can_advance());
    assert_eq!(wizard.confirm(), WizardResult::Continue);
    assert_eq!(wizard.step(), WizardStep::Industry);

    wizard.cycle_focus();
    wizard.select(true);
    assert!(wizard.can_advance());
    assert_eq!(wizard.confirm(), WizardResult::Continue);
    assert_eq!(wizard.step(), WizardStep::Leadership);
}

#[test]
fn test_full_walkthrough_finishes_with_a_complete_profile() {
    let mut wizard = ProfileWizard::new();

    pick_industry(&mut wizard);
    wizard.confirm();

    // Leadership: title, size, region.
    wizard.select(true);
    wizard.cycle_focus();
    wizard.select(true);
    wizard.cycle_focus();
    wizard.select(true);
    assert!(wizard.can_advance());
    wizard.confirm();

    // Branding is optional; skip straight through.
    assert_eq!(wizard.step(), WizardStep::Branding);
    wizard.confirm();

    // Invite one co-admin, then finish.
    assert_eq!(wizard.step(), WizardStep::CoAdmins);
    for c in "Jordan Reyes".chars() {
        wizard.input_char(c);
    }
    wizard.cycle_focus();
    for c in "jordan@acme.test".chars() {
        wizard.input_char(c);
    }
    wizard.add_coadmin();
    assert!(wizard.coadmin_error.is_none());

    assert_eq!(wizard.confirm(), WizardResult::Finished);
    // The completion signal does not move the position.
    assert_eq!(wizard.step(), WizardStep::CoAdmins);

    let profile = &wizard.profile;
    assert!(profile.industry_complete());
    assert!(profile.leadership_complete());
    assert_eq!(profile.co_admins.len(), 1);
    assert_eq!(profile.co_admins[0].email, "jordan@acme.test");
}

#[test]
fn test_escape_walks_back_and_cancels_at_the_start() {
    let mut wizard = ProfileWizard::new();
    pick_industry(&mut wizard);
    wizard.confirm();
    assert_eq!(wizard.step(), WizardStep::Leadership);

    assert_eq!(wizard.go_back(), WizardResult::Continue);
    assert_eq!(wizard.step(), WizardStep::Industry);
    // Entered values survive the retreat.
    assert!(wizard.profile.industry_complete());

    assert_eq!(wizard.go_back(), WizardResult::Cancelled);
}

#[test]
fn test_bad_coadmin_email_is_rejected_inline() {
    let mut wizard = ProfileWizard::new();
    pick_industry(&mut wizard);
    wizard.confirm();
    wizard.select(true);
    wizard.cycle_focus();
    wizard.select(true);
    wizard.cycle_focus();
    wizard.select(true);
    wizard.confirm();
    wizard.confirm();
    assert_eq!(wizard.step(), WizardStep::CoAdmins);

    for c in "Sam".chars() {
        wizard.input_char(c);
    }
    wizard.cycle_focus();
    for c in "not-an-email".chars() {
        wizard.input_char(c);
    }
    wizard.add_coadmin();

    assert!(wizard.coadmin_error.is_some());
    assert!(wizard.profile.co_admins.is_empty());
    // The step itself still advances; invites are optional.
    assert!(wizard.can_advance());
}
