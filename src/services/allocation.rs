//! Allocation service
//!
//! Splits one paycheck across bills, goals, and guilt-free spending.
//!
//! The waterfall runs in a fixed order:
//!
//! 1. Bills are funded in the order given until the money runs out.
//! 2. Each goal's desired amount is computed, percentages against either the
//!    gross paycheck or what bills left over.
//! 3. If the goals want more than is left, every goal is scaled down by the
//!    same factor. Any cent lost to rounding goes to the first goal.
//! 4. Whatever remains is guilt-free.

use tracing::debug;

use crate::config::settings::Settings;
use crate::error::{WaterfallError, WaterfallResult};
use crate::models::{
    AllocationMeta, AllocationResult, Bill, BillResult, Goal, GoalResult, Money, PaycheckPlan,
    PercentBasis,
};

/// Allocate a paycheck across bills, goals, and guilt-free spending
///
/// Fails with [`WaterfallError::InvalidArgument`] when `paycheck` is
/// negative, when a goal's value is not finite or asks for an out-of-range
/// amount, or when running totals overflow. Negative bill amounts and goal
/// values are not rejected; they flow through the arithmetic as given.
///
/// # Examples
/// ```
/// use paycheck_waterfall::models::{Bill, Money, PercentBasis};
/// use paycheck_waterfall::services::allocate;
///
/// let bills = vec![Bill::new("Rent", Money::from_decimal(1000.0))];
/// let result = allocate(Money::from_decimal(1500.0), &bills, &[], PercentBasis::Gross).unwrap();
/// assert_eq!(result.guilt_free, Money::from_decimal(500.0));
/// ```
pub fn allocate(
    paycheck: Money,
    bills: &[Bill],
    goals: &[Goal],
    percent_apply: PercentBasis,
) -> WaterfallResult<AllocationResult> {
    if paycheck.is_negative() {
        return Err(WaterfallError::invalid_argument(format!(
            "paycheck amount must be non-negative, got {}",
            paycheck
        )));
    }

    let (bill_results, remaining_after_bills) = fund_bills(paycheck, bills)?;

    let basis = match percent_apply {
        PercentBasis::Gross => paycheck,
        PercentBasis::Remainder => remaining_after_bills,
    };

    let mut goal_results = goals
        .iter()
        .map(|goal| GoalResult::unfunded(goal, basis))
        .collect::<WaterfallResult<Vec<_>>>()?;

    let guilt_free = fund_goals(&mut goal_results, remaining_after_bills)?;

    Ok(AllocationResult {
        bills: bill_results,
        goals: goal_results,
        guilt_free,
        meta: AllocationMeta {
            paycheck,
            remaining_after_bills,
        },
    })
}

/// Allocate a plan, using `default_basis` when the plan does not name one
pub fn allocate_plan(
    plan: &PaycheckPlan,
    default_basis: PercentBasis,
) -> WaterfallResult<AllocationResult> {
    allocate(
        plan.paycheck,
        &plan.bills,
        &plan.goals,
        plan.percent_apply.unwrap_or(default_basis),
    )
}

/// Fund bills in order, returning the results and what is left
fn fund_bills(paycheck: Money, bills: &[Bill]) -> WaterfallResult<(Vec<BillResult>, Money)> {
    let mut remaining = paycheck;
    let mut results = Vec::with_capacity(bills.len());

    for bill in bills {
        let result = BillResult::fund(bill, remaining);
        remaining = remaining.checked_sub(result.allocated).ok_or_else(|| {
            WaterfallError::invalid_argument(format!(
                "bill '{}' pushes the running total out of range",
                bill.name
            ))
        })?;

        if !result.is_covered() {
            debug!(
                bill = %result.name,
                required = %result.required,
                allocated = %result.allocated,
                "Bill underfunded"
            );
        }

        results.push(result);
    }

    Ok((results, remaining))
}

/// Fill goals from `available`, returning the guilt-free remainder
fn fund_goals(goals: &mut [GoalResult], available: Money) -> WaterfallResult<Money> {
    let desired_total = goals
        .iter()
        .try_fold(Money::zero(), |total, g| total.checked_add(g.desired))
        .ok_or_else(|| WaterfallError::invalid_argument("goal totals are out of range"))?;
    let cap = desired_total.min(available);

    if !desired_total.is_positive() || !cap.is_positive() {
        return Ok(available);
    }

    if cap < desired_total {
        debug!(
            desired = %desired_total,
            available = %available,
            "Scaling goals down to fit"
        );
    }

    for goal in goals.iter_mut() {
        goal.allocated = goal.desired.scale(cap, desired_total);
    }

    let allocated: Money = goals.iter().map(|g| g.allocated).sum();
    let rounding_gap = cap - allocated;
    if !rounding_gap.is_zero() {
        if let Some(first) = goals.first_mut() {
            debug!(goal = %first.name, gap = %rounding_gap, "Absorbing rounding gap");
            first.allocated += rounding_gap;
        }
    }

    Ok(available - goals.iter().map(|g| g.allocated).sum::<Money>())
}

/// Service for allocating plans with the user's configured defaults
pub struct AllocationService<'a> {
    settings: &'a Settings,
}

impl<'a> AllocationService<'a> {
    /// Create a new allocation service
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// The basis used for plans that don't specify one
    pub fn default_basis(&self) -> PercentBasis {
        self.settings.default_percent_basis
    }

    /// Allocate a plan, honoring the configured default percent basis
    pub fn allocate_plan(&self, plan: &PaycheckPlan) -> WaterfallResult<AllocationResult> {
        allocate_plan(plan, self.default_basis())
    }
}
