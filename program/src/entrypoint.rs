use crate::instruction::{self, decode_instruction, DecodedInstruction};
use pinocchio::{
    account_info::AccountInfo, msg, program_entrypoint, program_error::ProgramError,
    pubkey::Pubkey, ProgramResult,
};

// Entrypoint macro
program_entrypoint!(process_instruction);

#[inline(always)]
fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    if *program_id != crate::ID {
        return Err(ProgramError::IncorrectProgramId);
    }

    match decode_instruction(instruction_data)? {
        DecodedInstruction::InitializeUserCard(args) => {
            msg!("Instruction: InitializeUserCard");
            instruction::process_initialize_user_card(accounts, args)
        }
        DecodedInstruction::UpgradeCard(args) => {
            msg!("Instruction: UpgradeCard");
            instruction::process_upgrade_card(accounts, args)
        }
        DecodedInstruction::Deactivate => {
            msg!("Instruction: Deactivate");
            instruction::process_deactivate(accounts)
        }
    }
}
