//! Small helpers shared by instruction handlers.

use anchor_lang::prelude::*;

/// Errors raised when moving lamports out of program custody
#[error_code]
pub enum VaultError {
    #[msg("Insufficient lamports in program custody")]
    InsufficientVaultFunds,
    #[msg("Arithmetic overflow")]
    BalanceOverflow,
}

/// Move lamports out of a program-owned account.
///
/// The runtime only permits debiting accounts this program owns; credits
/// may target any writable account, so payouts to arbitrary wallets go
/// through here rather than a system-program CPI.
pub fn transfer_lamports(from: &AccountInfo, to: &AccountInfo, amount: u64) -> Result<()> {
    let debited = from
        .lamports()
        .checked_sub(amount)
        .ok_or(VaultError::InsufficientVaultFunds)?;
    let credited = to
        .lamports()
        .checked_add(amount)
        .ok_or(VaultError::BalanceOverflow)?;

    **from.try_borrow_mut_lamports()? = debited;
    **to.try_borrow_mut_lamports()? = credited;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_lamports_and_rejects_overdraw() {
        let key_a = Pubkey::new_unique();
        let key_b = Pubkey::new_unique();
        let owner = crate::ID;
        let mut lamports_a = 500u64;
        let mut lamports_b = 100u64;
        let mut data_a: [u8; 0] = [];
        let mut data_b: [u8; 0] = [];

        let from = AccountInfo::new(
            &key_a, false, true, &mut lamports_a, &mut data_a, &owner, false, 0,
        );
        let to = AccountInfo::new(
            &key_b, false, true, &mut lamports_b, &mut data_b, &owner, false, 0,
        );

        transfer_lamports(&from, &to, 200).unwrap();
        assert_eq!(from.lamports(), 300);
        assert_eq!(to.lamports(), 300);

        assert!(transfer_lamports(&from, &to, 301).is_err());
        assert_eq!(from.lamports(), 300);
        assert_eq!(to.lamports(), 300);
    }
}
