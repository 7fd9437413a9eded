use criterion::{Criterion, black_box, criterion_group, criterion_main};
use waqt_core::{
    AsrJuristic, CalculationMethod, Coordinate, HighLatitudeAdjustment, NoonSide,
    PrayerSettings, SunAngleSolver, compute_day_times,
};
use waqt_solar::LocalJulianDay;
use waqt_time::CalendarDate;

fn solver_bench(c: &mut Criterion) {
    let day = LocalJulianDay::new(CalendarDate::new(2024, 3, 20), 90.4125);
    let solver = SunAngleSolver::new(day, 23.8103);

    let mut group = c.benchmark_group("solver");
    group.bench_function("sun_angle_time_fajr", |b| {
        b.iter(|| solver.sun_angle_time(black_box(18.0), black_box(5.0 / 24.0), NoonSide::Before))
    });
    group.bench_function("asr_time_hanafi", |b| {
        b.iter(|| solver.asr_time(black_box(2.0), black_box(13.0 / 24.0)))
    });
    group.finish();
}

fn pipeline_bench(c: &mut Criterion) {
    let date = CalendarDate::new(2024, 3, 20);
    let dhaka = Coordinate::new(23.8103, 90.4125);
    let oslo = Coordinate::new(59.91, 10.75);
    let karachi = PrayerSettings::new(CalculationMethod::Karachi).with_asr(AsrJuristic::Hanafi);
    let angle_based = PrayerSettings::default()
        .with_high_latitude(HighLatitudeAdjustment::AngleBased)
        .with_iterations(4);

    let mut group = c.benchmark_group("day_times");
    group.bench_function("dhaka_karachi", |b| {
        b.iter(|| compute_day_times(black_box(date), black_box(&dhaka), 6.0, &karachi))
    });
    group.bench_function("oslo_summer_angle_based", |b| {
        let summer = CalendarDate::new(2024, 6, 21);
        b.iter(|| compute_day_times(black_box(summer), black_box(&oslo), 2.0, &angle_based))
    });
    group.finish();
}

criterion_group!(benches, solver_bench, pipeline_bench);
criterion_main!(benches);
