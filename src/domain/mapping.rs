//! Entity <-> DTO mapping.
//!
//! Every field is mapped one to one; nothing is renamed or dropped
//! apart from the owner navigation on accounts, which the DTO never had.

use super::{Account, AccountDto, Owner, OwnerDto};

impl From<Account> for AccountDto {
    fn from(account: Account) -> Self {
        Self {
            account_id: account.account_id,
            date_created: account.date_created,
            account_type: account.account_type,
            owner_id: account.owner_id,
        }
    }
}

impl From<AccountDto> for Account {
    fn from(dto: AccountDto) -> Self {
        Self {
            account_id: dto.account_id,
            date_created: dto.date_created,
            account_type: dto.account_type,
            owner_id: dto.owner_id,
        }
    }
}

impl From<Owner> for OwnerDto {
    fn from(owner: Owner) -> Self {
        Self {
            id: owner.id,
            name: owner.name,
            date_created: owner.date_created,
            accounts: owner
                .accounts
                .map(|accounts| accounts.into_iter().map(AccountDto::from).collect()),
        }
    }
}

impl From<OwnerDto> for Owner {
    fn from(dto: OwnerDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            date_created: dto.date_created,
            accounts: dto
                .accounts
                .map(|accounts| accounts.into_iter().map(Account::from).collect()),
        }
    }
}

/// Map a sequence of owners, preserving order
pub fn map_owners(owners: Vec<Owner>) -> Vec<OwnerDto> {
    owners.into_iter().map(OwnerDto::from).collect()
}
