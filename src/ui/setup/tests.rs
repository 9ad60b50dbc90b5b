use super::*;

fn fill_industry(wizard: &mut ProfileWizard) {
    wizard.profile.set_industry("Technology");
    wizard.profile.sub_industry = "SaaS".to_string();
}

fn fill_leadership(wizard: &mut ProfileWizard) {
    wizard.profile.leadership_title = "CEO / Chief Executive Officer".to_string();
    wizard.profile.org_size = "11-50 employees".to_string();
    wizard.profile.region = "North America".to_string();
}

#[test]
fn test_industry_without_sub_industry_blocks_advance() {
    let mut wizard = ProfileWizard::new();
    wizard.profile.set_industry("Technology");

    assert!(!wizard.can_advance());
    assert_eq!(wizard.confirm(), WizardResult::Continue);
    assert_eq!(wizard.step(), WizardStep::Industry);

    wizard.profile.sub_industry = "SaaS".to_string();
    assert!(wizard.can_advance());
    wizard.confirm();
    assert_eq!(wizard.step(), WizardStep::Leadership);
}

#[test]
fn test_optional_steps_advance_when_empty() {
    let mut wizard = ProfileWizard::new();
    fill_industry(&mut wizard);
    fill_leadership(&mut wizard);

    wizard.confirm();
    wizard.confirm();
    assert_eq!(wizard.step(), WizardStep::Branding);

    // Branding and co-admins have no required fields.
    assert_eq!(wizard.confirm(), WizardResult::Continue);
    assert_eq!(wizard.step(), WizardStep::CoAdmins);
    assert_eq!(wizard.confirm(), WizardResult::Finished);
}

#[test]
fn test_back_from_first_step_cancels() {
    let mut wizard = ProfileWizard::new();
    assert_eq!(wizard.go_back(), WizardResult::Cancelled);

    fill_industry(&mut wizard);
    wizard.confirm();
    assert_eq!(wizard.go_back(), WizardResult::Continue);
    assert_eq!(wizard.step(), WizardStep::Industry);
}

#[test]
fn test_changing_industry_requires_new_sub_industry() {
    let mut wizard = ProfileWizard::new();
    fill_industry(&mut wizard);
    assert!(wizard.can_advance());

    wizard.profile.set_industry("Healthcare");
    assert!(!wizard.can_advance());
}

#[test]
fn test_coadmin_draft_validation() {
    let mut wizard = ProfileWizard::new();
    fill_industry(&mut wizard);
    fill_leadership(&mut wizard);
    wizard.confirm();
    wizard.confirm();
    wizard.confirm();
    assert_eq!(wizard.step(), WizardStep::CoAdmins);

    wizard.coadmin_draft.name = "Dana".to_string();
    wizard.coadmin_draft.email = "not-an-email".to_string();
    wizard.add_coadmin();
    assert!(wizard.coadmin_error.is_some());
    assert!(wizard.profile.co_admins.is_empty());

    wizard.coadmin_draft.email = "dana@example.com".to_string();
    wizard.add_coadmin();
    assert!(wizard.coadmin_error.is_none());
    assert_eq!(wizard.profile.co_admins.len(), 1);
    // Draft resets for the next invite.
    assert!(wizard.coadmin_draft.name.is_empty());
}

#[test]
fn test_select_applies_list_choice_to_profile() {
    let mut wizard = ProfileWizard::new();

    // Moving the industry cursor applies the highlighted industry.
    wizard.select(true);
    assert!(!wizard.profile.industry.is_empty());
    assert!(wizard.profile.sub_industry.is_empty());

    wizard.cycle_focus();
    assert_eq!(wizard.industry_focus, IndustryFocus::SubIndustry);
    wizard.select(true);
    assert!(!wizard.profile.sub_industry.is_empty());
    assert!(wizard.can_advance());
}
