use solana_pubkey::Pubkey;

use crate::error::Error;

/// Account list bound to the role names an instruction declares.
///
/// Trailing accounts beyond the declared roles are preserved in
/// `additional`; some instructions accept optional trailing signers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundAccounts {
    named: Vec<(&'static str, Pubkey)>,
    additional: Vec<Pubkey>,
}

impl BoundAccounts {
    /// Role/pubkey pairs in declaration order.
    pub fn named(&self) -> &[(&'static str, Pubkey)] {
        &self.named
    }

    pub fn role(&self, name: &str) -> Option<Pubkey> {
        self.named
            .iter()
            .find(|(role, _)| *role == name)
            .map(|(_, pubkey)| *pubkey)
    }

    pub fn additional(&self) -> &[Pubkey] {
        &self.additional
    }
}

/// Bind `accounts` positionally against `roles`: the role at position `i`
/// binds to `accounts[i]`.
pub fn bind(accounts: &[Pubkey], roles: &'static [&'static str]) -> Result<BoundAccounts, Error> {
    if accounts.len() < roles.len() {
        return Err(Error::InsufficientAccounts {
            required: roles.len(),
            provided: accounts.len(),
        });
    }
    let named = roles
        .iter()
        .copied()
        .zip(accounts.iter().copied())
        .collect();
    let additional = accounts[roles.len()..].to_vec();
    Ok(BoundAccounts { named, additional })
}
