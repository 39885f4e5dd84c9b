pub mod const_authority {
    use anchor_lang::solana_program::pubkey::Pubkey;
    use const_crypto::ed25519;
    use crate::constants::VAULT_AUTHORITY;

    const VAULT_AUTHORITY_AND_BUMP: ([u8; 32], u8) = ed25519::derive_program_address(
        &[VAULT_AUTHORITY],
        &crate::ID_CONST.to_bytes(),
    );

    pub const VAULT_ID: Pubkey = Pubkey::new_from_array(VAULT_AUTHORITY_AND_BUMP.0);

    pub const VAULT_BUMP: u8 = VAULT_AUTHORITY_AND_BUMP.1;
}
