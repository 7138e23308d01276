//! MembershipShell - interactive purchase flow.
//!
//! Walks the user through plan, member count, and feature selection, shows
//! the priced summary, and asks for confirmation. Invalid input ends the
//! run immediately; there is no re-prompting.

pub mod render;

use thiserror::Error;

use crate::application::handlers::{
    ConfirmMembershipCommand, ConfirmMembershipHandler, QuoteMembershipHandler,
    QuoteMembershipQuery,
};
use crate::domain::foundation::DomainError;
use crate::domain::membership::{MemberCount, MembershipPurchase, PriceQuote, PricingError};
use crate::ports::Prompt;

/// Why a shell run ended without a quote being confirmed or declined.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AbortReason {
    #[error("plan '{0}' is not available")]
    UnknownPlan(String),

    #[error("'{0}' is not a valid number")]
    InvalidNumber(String),

    #[error("member count {0} is below one")]
    TooFewMembers(i64),

    #[error("feature '{0}' is not available")]
    UnknownFeature(String),

    #[error("pricing failed: {0}")]
    Pricing(#[from] PricingError),

    #[error("input closed")]
    InputClosed,
}

/// How a shell run ended.
#[derive(Debug, Clone, PartialEq)]
pub enum ShellOutcome {
    /// The user accepted the quote.
    Confirmed(MembershipPurchase),
    /// The user declined the quote.
    Cancelled,
    /// Input was rejected before a quote could be confirmed.
    Aborted(AbortReason),
}

impl ShellOutcome {
    /// Returns the confirmed total, or `-1` for any other outcome.
    pub fn legacy_code(&self) -> i64 {
        match self {
            ShellOutcome::Confirmed(purchase) => {
                i64::try_from(purchase.total_cost).unwrap_or(i64::MAX)
            }
            ShellOutcome::Cancelled | ShellOutcome::Aborted(_) => -1,
        }
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self, ShellOutcome::Confirmed(_))
    }
}

enum Interrupt {
    Abort(AbortReason),
    Failed(DomainError),
}

impl From<AbortReason> for Interrupt {
    fn from(reason: AbortReason) -> Self {
        Interrupt::Abort(reason)
    }
}

impl From<DomainError> for Interrupt {
    fn from(err: DomainError) -> Self {
        Interrupt::Failed(err)
    }
}

/// Splits a comma-separated feature selection into trimmed keys.
///
/// Blank input selects nothing. Empty segments (e.g. `"1,,3"`) are kept
/// as empty keys so they fail catalog validation.
pub fn parse_feature_selection(input: &str) -> Vec<String> {
    let input = input.trim();
    if input.is_empty() {
        return Vec::new();
    }
    input.split(',').map(|key| key.trim().to_string()).collect()
}

/// Returns true for an affirmative confirmation answer.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "yes" | "y")
}

/// Interactive membership purchase flow over a `Prompt`.
pub struct MembershipShell<P> {
    prompt: P,
    quotes: QuoteMembershipHandler,
    confirmations: ConfirmMembershipHandler,
}

impl<P: Prompt> MembershipShell<P> {
    pub fn new(
        prompt: P,
        quotes: QuoteMembershipHandler,
        confirmations: ConfirmMembershipHandler,
    ) -> Self {
        Self {
            prompt,
            quotes,
            confirmations,
        }
    }

    /// Consumes the shell and returns its prompt.
    pub fn into_prompt(self) -> P {
        self.prompt
    }

    /// Runs the full flow once.
    ///
    /// # Errors
    ///
    /// Only prompt I/O failures are errors. Rejected input is reported as
    /// `ShellOutcome::Aborted`.
    pub fn run(&mut self) -> Result<ShellOutcome, DomainError> {
        match self.run_steps() {
            Ok(outcome) => Ok(outcome),
            Err(Interrupt::Abort(reason)) => {
                tracing::info!(%reason, "Membership purchase aborted");
                Ok(ShellOutcome::Aborted(reason))
            }
            Err(Interrupt::Failed(err)) => Err(err),
        }
    }

    fn run_steps(&mut self) -> Result<ShellOutcome, Interrupt> {
        self.prompt.say(render::WELCOME)?;

        let plan = self.choose_plan()?;
        let members = self.choose_members()?;
        let feature_keys = self.choose_features()?;

        let query = QuoteMembershipQuery {
            plan,
            feature_keys,
            member_count: members,
        };
        let quote = self.price(&query)?;

        for line in render::confirmation_summary(&query.plan, members, &quote, self.quotes.rules())
        {
            self.prompt.say(&line)?;
        }

        self.prompt.say("")?;
        let answer = self.read("Do you want to confirm this membership? (yes/no): ")?;
        if !is_affirmative(&answer) {
            self.prompt.say("Membership Canceled.")?;
            return Ok(ShellOutcome::Cancelled);
        }

        self.prompt.say(&format!(
            "Membership Confirmed! Total to pay: ${}",
            quote.final_cost
        ))?;
        let purchase = self.confirmations.handle(ConfirmMembershipCommand {
            plan: query.plan,
            member_count: members,
            quote,
        });
        Ok(ShellOutcome::Confirmed(purchase))
    }

    fn price(&mut self, query: &QuoteMembershipQuery) -> Result<PriceQuote, Interrupt> {
        match self.quotes.handle(query) {
            Ok(quote) => Ok(quote),
            Err(err) => {
                self.prompt.say(&format!("Calculation Error: {}", err))?;
                Err(AbortReason::from(err).into())
            }
        }
    }

    fn choose_plan(&mut self) -> Result<String, Interrupt> {
        for line in render::plan_menu(self.quotes.catalog()) {
            self.prompt.say(&line)?;
        }

        let plan = self
            .read("Enter the name of the plan you want (e.g., Basic): ")?
            .trim()
            .to_string();
        if self.quotes.catalog().plan(&plan).is_none() {
            self.prompt.say("Error: Plan not available.")?;
            return Err(AbortReason::UnknownPlan(plan).into());
        }
        Ok(plan)
    }

    fn choose_members(&mut self) -> Result<MemberCount, Interrupt> {
        let raw = self.read("How many members are signing up? ")?;
        let raw = raw.trim();

        let count = match raw.parse::<i64>() {
            Ok(count) => count,
            Err(_) => {
                self.prompt.say("Error: Invalid number.")?;
                return Err(AbortReason::InvalidNumber(raw.to_string()).into());
            }
        };
        if count < 1 {
            self.prompt.say("Error: At least one member is required.")?;
            return Err(AbortReason::TooFewMembers(count).into());
        }
        let members = match MemberCount::try_new(count) {
            Ok(members) => members,
            Err(_) => {
                self.prompt.say("Error: Invalid number.")?;
                return Err(AbortReason::InvalidNumber(raw.to_string()).into());
            }
        };

        if members.get() >= self.quotes.rules().group_min_members {
            self.prompt
                .say(&render::group_discount_notice(self.quotes.rules()))?;
        }
        Ok(members)
    }

    fn choose_features(&mut self) -> Result<Vec<String>, Interrupt> {
        for line in render::feature_menu(self.quotes.catalog()) {
            self.prompt.say(&line)?;
        }
        self.prompt
            .say("Enter feature numbers separated by comma (e.g., 1,3) or leave empty.")?;

        let keys = parse_feature_selection(&self.read("Selection: ")?);
        if let Some(unknown) = keys
            .iter()
            .find(|key| self.quotes.catalog().feature(key).is_none())
        {
            self.prompt
                .say(&format!("Error: Feature '{}' is not available.", unknown))?;
            return Err(AbortReason::UnknownFeature(unknown.clone()).into());
        }
        Ok(keys)
    }

    fn read(&mut self, question: &str) -> Result<String, Interrupt> {
        match self.prompt.ask(question)? {
            Some(line) => Ok(line),
            None => Err(AbortReason::InputClosed.into()),
        }
    }
}
