use crate::presentation::Headline;
use report_core::{AdviceKey, RewardCategory, ValidationFailReason};

/// English message key handed to the translation layer.
pub trait MessageKey {
    fn message_key(&self) -> &'static str;
}

impl MessageKey for ValidationFailReason {
    fn message_key(&self) -> &'static str {
        match self {
            ValidationFailReason::LateSubmission => "Late submission",
            ValidationFailReason::MissedValidation => "Missed validation",
            ValidationFailReason::WrongAnswers => "Wrong answers",
        }
    }
}

impl MessageKey for Headline {
    fn message_key(&self) -> &'static str {
        match self {
            Headline::SuccessfullyValidated => "Successfully validated",
            Headline::Validated => "Validated",
            Headline::ValidationFailed => "Validation failed",
        }
    }
}

pub fn category_label(category: RewardCategory) -> &'static str {
    match category {
        RewardCategory::Validation => "Validation",
        RewardCategory::Flips => "Flips",
        RewardCategory::Invitations => "Invitations",
        RewardCategory::FlipReports => "Flip reports",
    }
}

pub fn category_description(category: RewardCategory) -> &'static str {
    match category {
        RewardCategory::Validation => "Rewards for the successfull validation",
        RewardCategory::Flips => "Rewards for submitted and qualified flips",
        RewardCategory::Invitations => "Rewards for invitee validation",
        RewardCategory::FlipReports => "Rewards for reporting bad flips",
    }
}

pub fn advice_message(category: RewardCategory, advice: AdviceKey) -> &'static str {
    match (advice, category) {
        (AdviceKey::Penalized, _) => "Your flips were reported. Make flips carefully",
        (AdviceKey::Maxed, _) => "Great job! You have earned maximum reward",
        (AdviceKey::MissedSome, RewardCategory::Validation) => {
            "Attend every validation to get a higher reward"
        }
        (AdviceKey::MissedSome, RewardCategory::Flips) => "Make flips carefully",
        (AdviceKey::MissedSome, RewardCategory::Invitations) => {
            "Invite your friends and help them to pass the first 3 validations"
        }
        (AdviceKey::MissedSome, RewardCategory::FlipReports) => {
            "Report all flips that break the rules"
        }
    }
}
