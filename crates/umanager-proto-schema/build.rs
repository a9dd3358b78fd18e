fn main() -> Result<(), Box<dyn std::error::Error>> {
    tonic_prost_build::compile_protos("proto/link/v1/link.proto")?;
    Ok(())
}
