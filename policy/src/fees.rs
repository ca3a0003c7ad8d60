//! Pure transfer-fee computation.

use crate::store::FeePolicy;
use levy_types::fees::BPS_DENOMINATOR;
use levy_types::Address;

/// Compute the fee withheld from a transfer of `amount` raw units.
///
/// Rules:
/// 1. Exemption on either side short-circuits everything: the other side's
///    configured rates are ignored entirely and the fee is zero.
/// 2. Otherwise the sender's outbound rate and the recipient's inbound rate
///    are added (basis points, never compounded) and applied once against
///    the original amount. The combined rate may exceed the per-address cap
///    since the cap binds each side independently.
/// 3. The result is `floor(amount × combined / 10_000)`.
///
/// Deterministic and total: same policy and inputs always produce the same
/// fee, for every `u128` amount.
pub fn compute_fee(
    policy: &FeePolicy,
    sender: &Address,
    recipient: &Address,
    amount: u128,
) -> u128 {
    if policy.is_fee_exempt(sender) || policy.is_fee_exempt(recipient) {
        return 0;
    }

    let combined =
        (policy.fee_rate(sender).outbound_bps + policy.fee_rate(recipient).inbound_bps) as u128;
    if combined == 0 {
        return 0;
    }

    // Split multiply: floor(a·c/d) == (a/d)·c + ((a%d)·c)/d exactly, and
    // neither term can overflow u128 for any amount.
    let denom = BPS_DENOMINATOR as u128;
    (amount / denom) * combined + (amount % denom) * combined / denom
}

#[cfg(test)]
mod tests {
    use super::*;
    use levy_types::FeeRate;

    fn test_address(n: u8) -> Address {
        Address::new(format!("levy_{:0>60}", n))
    }

    fn policy_with_rates(sender_out: u32, recipient_in: u32) -> (FeePolicy, Address, Address) {
        let controller = test_address(1);
        let sender = test_address(2);
        let recipient = test_address(3);
        let mut policy = FeePolicy::new(controller.clone());
        policy
            .set_fee_rate(&controller, sender.clone(), FeeRate::new(sender_out, 0))
            .unwrap();
        policy
            .set_fee_rate(&controller, recipient.clone(), FeeRate::new(0, recipient_in))
            .unwrap();
        (policy, sender, recipient)
    }

    #[test]
    fn no_rates_no_fee() {
        let (policy, sender, recipient) = policy_with_rates(0, 0);
        assert_eq!(compute_fee(&policy, &sender, &recipient, 1_000_000_000), 0);
    }

    #[test]
    fn inbound_only() {
        let (policy, sender, recipient) = policy_with_rates(0, 1000);
        assert_eq!(
            compute_fee(&policy, &sender, &recipient, 1_000_000_000),
            100_000_000
        );
    }

    #[test]
    fn rates_are_additive_not_compounded() {
        let (policy, sender, recipient) = policy_with_rates(1000, 1000);
        // 20% of the original amount, not 10% of 90%.
        assert_eq!(
            compute_fee(&policy, &sender, &recipient, 1_000_000_000),
            200_000_000
        );
    }

    #[test]
    fn exemption_overrides_maximum_rates() {
        let (mut policy, sender, recipient) = policy_with_rates(1000, 1000);
        let controller = test_address(1);
        policy
            .set_fee_exempt(&controller, sender.clone(), true)
            .unwrap();
        assert_eq!(compute_fee(&policy, &sender, &recipient, 1_000_000_000), 0);

        // Swap which side is exempt: same result.
        policy
            .set_fee_exempt(&controller, sender.clone(), false)
            .unwrap();
        policy
            .set_fee_exempt(&controller, recipient.clone(), true)
            .unwrap();
        assert_eq!(compute_fee(&policy, &sender, &recipient, 1_000_000_000), 0);
    }

    #[test]
    fn fee_is_floored() {
        let (policy, sender, recipient) = policy_with_rates(1, 0);
        // 1 bp of 9_999 = 0.9999 → floors to 0.
        assert_eq!(compute_fee(&policy, &sender, &recipient, 9_999), 0);
        assert_eq!(compute_fee(&policy, &sender, &recipient, 10_000), 1);
        assert_eq!(compute_fee(&policy, &sender, &recipient, 19_999), 1);
    }

    #[test]
    fn huge_amounts_do_not_overflow() {
        // 2000 bp combined is exactly one fifth; a naive amount × 2000
        // multiply would overflow long before u128::MAX.
        let (policy, sender, recipient) = policy_with_rates(1000, 1000);
        let fee = compute_fee(&policy, &sender, &recipient, u128::MAX);
        assert_eq!(fee, u128::MAX / 5);
    }
}
