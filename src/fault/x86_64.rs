use std::arch::asm;

/// # Safety
/// `addr` is dereferenced as-is.
pub(super) unsafe fn load_u32(addr: usize) -> u32 {
    let value: u32;
    unsafe {
        asm!(
            "mov {value:e}, dword ptr [{addr}]",
            addr = in(reg) addr,
            value = out(reg) value,
            options(nostack, readonly, preserves_flags),
        );
    }
    value
}
