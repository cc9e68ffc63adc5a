fn main() -> anyhow::Result<()> {
  athlete_program_lib::run()
}
