#[cfg(target_arch = "x86_64")]
mod x86_64;
#[cfg(target_arch = "x86_64")]
use x86_64::load_u32;

#[cfg(target_arch = "aarch64")]
mod aarch64;
#[cfg(target_arch = "aarch64")]
use aarch64::load_u32;

// The `core::ptr` debug assertions reject a null pointer before the load
// happens, which would turn the segfault into an abort. Architectures we
// have assembly for skip them entirely. Everywhere else a debug build dies
// with SIGABRT instead of SIGSEGV; release builds still fault on the load.
#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
unsafe fn load_u32(addr: usize) -> u32 {
    unsafe { std::ptr::read_volatile(addr as *const u32) }
}

/// Load 32 bits from address 0. The process dies with SIGSEGV.
#[inline(never)]
pub fn null_dereference() -> ! {
    let addr = std::hint::black_box(0usize);
    let value = unsafe { load_u32(addr) };
    std::hint::black_box(value);
    unreachable!("load from {addr:#x} returned {value}");
}
