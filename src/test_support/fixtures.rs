//! Table and signature dump excerpts.

/// Type-first table dump. The profile GUID count entry points at the wrong
/// member, as in the stock SDK table.
pub const TABLE: &str = "\
pub PNVENCGETENCODEGUIDCOUNT: nvEncGetEncodeGUIDCount,
pub PNVENCGETENCODEPROFILEGUIDCOUNT: nvEncGetEncodeGUIDCount,
pub PNVENCCREATEBITSTREAMBUFFER: nvEncCreateBitstreamBuffer,
pub PNVENCDESTROYENCODER: nvEncDestroyEncoder,
";

/// Struct-field table dump as produced by a binding generator.
pub const MEMBER_FIRST_TABLE: &str = "\
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct _NV_ENCODE_API_FUNCTION_LIST {
    pub version: u32,
    pub reserved: u32,
    pub nvEncOpenEncodeSession: PNVENCOPENENCODESESSION,
    pub nvEncGetEncodeGUIDCount: PNVENCGETENCODEGUIDCOUNT,
    pub nvEncCreateBitstreamBuffer: PNVENCCREATEBITSTREAMBUFFER,
    pub nvEncDestroyEncoder: PNVENCDESTROYENCODER,
}
";

/// Signature dump. `PNVENCOPENENCODESESSIONEX` does not take the encoder
/// handle first and is not a wrapper candidate.
pub const SIGNATURES: &str = "\
pub type PNVENCOPENENCODESESSIONEX = ::std::option::Option<
    unsafe extern \"C\" fn(
        openSessionExParams: *mut NV_ENC_OPEN_ENCODE_SESSION_EX_PARAMS,
        encoder: *mut *mut ::std::os::raw::c_void,
    ) -> NVENCSTATUS,
>;
pub type PNVENCGETENCODEGUIDCOUNT = ::std::option::Option<
    unsafe extern \"C\" fn(
        encoder: *mut ::std::os::raw::c_void,
        encodeGUIDCount: *mut u32,
    ) -> NVENCSTATUS,
>;
pub type PNVENCGETENCODEPROFILEGUIDCOUNT = ::std::option::Option<
    unsafe extern \"C\" fn(
        encoder: *mut ::std::os::raw::c_void,
        encodeGUID: GUID,
        encodeProfileGUIDCount: *mut u32,
    ) -> NVENCSTATUS,
>;
pub type PNVENCCREATEBITSTREAMBUFFER = ::std::option::Option<
    unsafe extern \"C\" fn(
        encoder: *mut ::std::os::raw::c_void,
        createBitstreamBufferParams: *mut NV_ENC_CREATE_BITSTREAM_BUFFER,
    ) -> NVENCSTATUS,
>;
pub type PNVENCDESTROYENCODER = ::std::option::Option<
    unsafe extern \"C\" fn(
        encoder: *mut ::std::os::raw::c_void,
    ) -> NVENCSTATUS,
>;
";
